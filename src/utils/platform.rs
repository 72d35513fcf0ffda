//! Platform-specific directory lookup.

use std::path::PathBuf;

use crate::constants::CACHE_DIR_ENV;
use crate::core::{McgError, Result};

/// Returns `true` when running on Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Returns the default cache root for mcgradle.
///
/// `$MCGRADLE_CACHE_DIR` wins when set and non-empty. Otherwise the
/// platform cache directory is used:
///
/// - **Linux**: `$XDG_CACHE_HOME/mcgradle` or `$HOME/.cache/mcgradle`
/// - **macOS**: `$HOME/Library/Caches/mcgradle`
/// - **Windows**: `%LOCALAPPDATA%\mcgradle`
pub fn get_cache_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CACHE_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::cache_dir().map(|p| p.join("mcgradle")).ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the LOCALAPPDATA environment variable is set"
        } else if cfg!(target_os = "macos") {
            "On macOS: Check that the HOME environment variable is set"
        } else {
            "On Linux: Check that the XDG_CACHE_HOME or HOME environment variable is set"
        };
        McgError::ConfigError {
            message: format!(
                "Could not determine cache directory. Set {CACHE_DIR_ENV} or [cache] dir.\n\n{platform_help}"
            ),
        }
    })
}
