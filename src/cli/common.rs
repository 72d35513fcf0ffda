//! Project setup shared by the CLI commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ProjectConfig;
use crate::context::{BuildContext, ContextRegistry};
use crate::plugin::{self, PluginInstance};

/// Options every project-bound command receives from the global flags.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    /// Explicit config file (`--config`).
    pub config: Option<PathBuf>,
    /// Project root (`--project-dir`); the current directory when unset.
    pub project_dir: Option<PathBuf>,
}

impl ProjectOptions {
    /// Absolute project directory.
    pub fn project_dir(&self) -> Result<PathBuf> {
        let dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        std::path::absolute(&dir)
            .with_context(|| format!("Failed to resolve project directory {}", dir.display()))
    }
}

/// A loaded project: config, registry and a context with the plugin applied.
pub struct ProjectSession {
    pub config: ProjectConfig,
    pub registry: ContextRegistry,
    pub context: BuildContext,
    pub instance: Arc<PluginInstance>,
}

impl ProjectSession {
    /// Load the config, build an HTTP-backed registry and apply the plugin to
    /// a fresh context.
    pub fn open(options: &ProjectOptions) -> Result<Self> {
        let project_dir = options.project_dir()?;
        let config_path = ProjectConfig::locate(&project_dir, options.config.as_deref());
        let config = ProjectConfig::load(&config_path)?;

        let registry = ContextRegistry::from_network_config(&config.network)
            .context("Failed to set up HTTP client")?;
        Self::with_registry(config, &project_dir, registry)
    }

    /// Like [`open`](Self::open) with an already loaded config and registry.
    pub fn with_registry(
        config: ProjectConfig,
        project_dir: &Path,
        mut registry: ContextRegistry,
    ) -> Result<Self> {
        let instance = PluginInstance::from_config(&config, project_dir)?;
        let context = BuildContext::new();
        debug!("Setting up {} for {}", context, project_dir.display());

        let instance = plugin::apply(&mut registry, context, instance)?;
        Ok(Self {
            config,
            registry,
            context,
            instance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CONFIG_FILE_NAME, MC_VERSION};
    use crate::remote::testing::StubFetcher;
    use tempfile::TempDir;

    #[test]
    fn test_open_reads_project_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[minecraft]\nversion = \"1.12.2\"\n\n[cache]\ndir = \"cache\"\n",
        )
        .unwrap();

        let options = ProjectOptions {
            config: None,
            project_dir: Some(temp.path().to_path_buf()),
        };
        let session = ProjectSession::open(&options).unwrap();

        assert_eq!(session.instance.extension.version, "1.12.2");
        assert_eq!(
            session.registry.resolve(session.context, MC_VERSION, &[]).unwrap(),
            "1.12.2"
        );
        assert!(session.instance.cache_dir.ends_with("cache"));
    }

    #[test]
    fn test_open_without_config_fails() {
        let temp = TempDir::new().unwrap();
        let options = ProjectOptions {
            config: None,
            project_dir: Some(temp.path().to_path_buf()),
        };
        let err = ProjectSession::open(&options).err().unwrap();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_with_registry() {
        let temp = TempDir::new().unwrap();
        let registry = ContextRegistry::with_fetcher(Box::new(StubFetcher::offline()));
        let session =
            ProjectSession::with_registry(ProjectConfig::for_version("1.13"), temp.path(), registry)
                .unwrap();

        assert!(session.registry.version_features(session.context).unwrap().new_config);
    }
}
