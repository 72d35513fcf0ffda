//! The `mcgradle.toml` project configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse_config;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_HTTP_TIMEOUT, USER_AGENT, VERSION_MANIFEST_URL};
use crate::core::McgError;
use crate::plugin::Extension;
use crate::utils::platform::get_cache_dir;

/// Top-level structure of `mcgradle.toml`.
///
/// ```toml
/// [minecraft]
/// version = "1.12.2"
/// mapping_channel = "snapshot"
/// mapping_version = "20171003"
///
/// [network]
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// The build's extension settings.
    pub minecraft: Extension,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// `[cache]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache root. Relative paths are taken from the project directory.
    /// Unset means `$MCGRADLE_CACHE_DIR` or the platform cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// `[network]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Location of the version manifest. May contain `@NAME@` tokens.
    #[serde(default = "default_manifest_url")]
    pub manifest_url: String,

    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_manifest_url() -> String {
    VERSION_MANIFEST_URL.to_string()
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT.as_secs()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            manifest_url: default_manifest_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NetworkConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ProjectConfig {
    /// Config with the given Minecraft version and defaults everywhere else.
    #[must_use]
    pub fn for_version(version: impl Into<String>) -> Self {
        Self {
            minecraft: Extension::new(version),
            cache: CacheConfig::default(),
            network: NetworkConfig::default(),
        }
    }

    /// Where to look for the config file.
    ///
    /// An explicit path wins; otherwise `mcgradle.toml` in `project_dir`.
    #[must_use]
    pub fn locate(project_dir: &Path, explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| project_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if
    /// `[minecraft] version` is empty.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading project config from {}", path.display());

        let config: Self = parse_config(path)?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Check the settings that serde cannot.
    pub fn validate(&self) -> crate::core::Result<()> {
        if self.minecraft.version.trim().is_empty() {
            return Err(McgError::ConfigError {
                message: "[minecraft] version must not be empty".to_string(),
            });
        }
        if self.network.timeout_secs == 0 {
            return Err(McgError::ConfigError {
                message: "[network] timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Absolute cache root for a project rooted at `project_dir`.
    pub fn cache_root(&self, project_dir: &Path) -> crate::core::Result<PathBuf> {
        match &self.cache.dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(project_dir.join(dir)),
            None => get_cache_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ProjectConfig = toml::from_str("[minecraft]\nversion = \"1.12.2\"\n").unwrap();

        assert_eq!(config.minecraft.version, "1.12.2");
        assert_eq!(config.minecraft.mapping_channel, "");
        assert_eq!(config.minecraft.run_directory, "run");
        assert_eq!(config.cache.dir, None);
        assert_eq!(config.network, NetworkConfig::default());
        assert_eq!(config.network.manifest_url, VERSION_MANIFEST_URL);
        assert_eq!(config.network.timeout(), DEFAULT_HTTP_TIMEOUT);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            [minecraft]
            version = "1.13"
            mapping_channel = "stable"
            mapping_version = "39"
            run_directory = "runs/client"

            [cache]
            dir = "cache"

            [network]
            manifest_url = "http://localhost/manifest.json"
            user_agent = "custom"
            timeout_secs = 5
        "#;
        let config: ProjectConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.minecraft.mapping_channel, "stable");
        assert_eq!(config.minecraft.run_directory, "runs/client");
        assert_eq!(config.network.user_agent, "custom");
        assert_eq!(config.network.timeout(), Duration::from_secs(5));

        let project = Path::new("/work/mod");
        assert_eq!(config.cache_root(project).unwrap(), project.join("cache"));
    }

    #[test]
    fn test_missing_version_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[minecraft]\nmapping_channel = \"snapshot\"\n").unwrap();

        assert!(ProjectConfig::load(&path).is_err());
    }

    #[test]
    fn test_empty_version_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[minecraft]\nversion = \"  \"\n").unwrap();

        let err = ProjectConfig::load(&path).unwrap_err();
        let root = err.downcast_ref::<McgError>();
        assert!(matches!(root, Some(McgError::ConfigError { .. })));
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ProjectConfig::for_version("1.12.2");
        config.network.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_locate() {
        let project = Path::new("/work/mod");
        assert_eq!(ProjectConfig::locate(project, None), project.join("mcgradle.toml"));
        assert_eq!(
            ProjectConfig::locate(project, Some(Path::new("/etc/other.toml"))),
            PathBuf::from("/etc/other.toml")
        );
    }

    #[test]
    fn test_absolute_cache_dir_kept() {
        let mut config = ProjectConfig::for_version("1.12.2");
        config.cache.dir = Some(PathBuf::from("/var/cache/mcg"));
        assert_eq!(
            config.cache_root(Path::new("/work/mod")).unwrap(),
            PathBuf::from("/var/cache/mcg")
        );
    }
}
