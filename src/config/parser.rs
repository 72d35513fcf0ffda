//! TOML file parsing with file-path error context.

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML file into `T`.
///
/// Read failures and parse failures are reported separately, each naming the
/// file, with the underlying I/O or TOML error kept as the cause.
///
/// # Examples
///
/// ```rust,no_run
/// use mcgradle_cli::config::{ProjectConfig, parse_config};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: ProjectConfig = parse_config(Path::new("mcgradle.toml"))?;
/// println!("Minecraft {}", config.minecraft.version);
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
