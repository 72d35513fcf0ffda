//! Test utilities for mcgradle
//!
//! Helpers shared by the unit tests and the `tests/integration` suite:
//! once-only logging setup, throwaway project directories with an
//! `mcgradle.toml`, and builders for manifest documents.
//!
//! # Example
//!
//! ```rust,no_run
//! use mcgradle_cli::test_utils::{ProjectFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let project = ProjectFixture::new("1.12.2").unwrap();
//! assert!(project.config_path().exists());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::{Context, Result};
use serde_json::json;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::ProjectConfig;
use crate::constants::CONFIG_FILE_NAME;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `level` set that level is used;
/// otherwise `RUST_LOG` is honoured, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=mcgradle_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A temporary project directory with its own `mcgradle.toml` and cache.
///
/// The cache lives under the project (`<project>/cache`) so tests never
/// touch the user's real cache directory.
pub struct ProjectFixture {
    dir: TempDir,
    config: ProjectConfig,
}

impl ProjectFixture {
    /// Project configured for `version`, with the cache inside the project.
    pub fn new(version: &str) -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp project")?;
        let mut config = ProjectConfig::for_version(version);
        config.cache.dir = Some(dir.path().join("cache"));

        let fixture = Self {
            dir,
            config,
        };
        fixture.write_config()?;
        Ok(fixture)
    }

    /// Point the manifest at `url` (typically a mock server).
    pub fn with_manifest_url(mut self, url: &str) -> Result<Self> {
        self.config.network.manifest_url = url.to_string();
        self.write_config()?;
        Ok(self)
    }

    /// Set the mapping channel and version.
    pub fn with_mappings(mut self, channel: &str, version: &str) -> Result<Self> {
        self.config.minecraft.mapping_channel = channel.to_string();
        self.config.minecraft.mapping_version = version.to_string();
        self.write_config()?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join(CONFIG_FILE_NAME)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.path().join("cache")
    }

    /// Where the manifest mirror lands.
    pub fn manifest_cache_path(&self) -> PathBuf {
        self.cache_dir().join("version_manifest.json")
    }

    /// Where the configured version's metadata mirror lands.
    pub fn version_cache_path(&self) -> PathBuf {
        self.cache_dir().join("versions").join(&self.config.minecraft.version).join("version.json")
    }

    fn write_config(&self) -> Result<()> {
        let text = toml::to_string(&self.config).context("Failed to serialize test config")?;
        std::fs::write(self.config_path(), text).context("Failed to write test config")
    }
}

/// Manifest JSON listing `(id, type, url)` entries in order.
pub fn manifest_json(entries: &[(&str, &str, &str)]) -> String {
    let versions: Vec<_> = entries
        .iter()
        .map(|(id, kind, url)| json!({ "id": id, "type": kind, "url": url }))
        .collect();
    json!({ "versions": versions }).to_string()
}
