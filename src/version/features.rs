//! Toolchain switches derived from the configured game version.

use crate::core::{McgError, Result};

/// Feature flags that depend on the selected version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionFeatures {
    /// Versions after 1.11 decompile with the newer decompiler setup.
    pub new_decompiler: bool,
    /// Versions after 1.12 use the newer configuration layout.
    pub new_config: bool,
}

impl VersionFeatures {
    /// Derive the flags from a dotted version string.
    ///
    /// Only the second component matters. A version without one (for
    /// example a snapshot id like `"18w30a"`) turns every flag off.
    ///
    /// # Errors
    ///
    /// [`McgError::InvalidVersion`] if the second component is not a number.
    pub fn for_version(version: &str) -> Result<Self> {
        let mut parts = version.split('.');
        let _major = parts.next();

        let Some(minor) = parts.next() else {
            return Ok(Self::default());
        };

        let minor: u32 = minor.parse().map_err(|_| McgError::InvalidVersion {
            version: version.to_string(),
        })?;

        Ok(Self {
            new_decompiler: minor > 11,
            new_config: minor > 12,
        })
    }
}
