//! The plugin instance and its wiring into a build context.
//!
//! Applying the plugin to a build does two things: it stores the
//! [`PluginInstance`] so later lookups can reach the configured versions,
//! and it registers the standard replacements every other template relies
//! on (`@CACHE_DIR@`, `@MC_VERSION@`, ...).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ProjectConfig;
use crate::constants::{
    BUILD_DIR, CACHE_DIR, MAPPING_CHANNEL, MAPPING_VERSION, MC_VERSION, PROJECT_DIR, RUN_DIRECTORY,
};
use crate::context::{BuildContext, ContextRegistry};
use crate::core::Result;

/// User-facing settings of the build, the `[minecraft]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// Configured Minecraft version, e.g. `1.12.2`.
    pub version: String,

    #[serde(default)]
    pub mapping_channel: String,

    #[serde(default)]
    pub mapping_version: String,

    /// Working directory for run configurations, relative to the project.
    #[serde(default = "default_run_directory")]
    pub run_directory: String,
}

fn default_run_directory() -> String {
    "run".to_string()
}

impl Extension {
    /// Extension for `version` with empty mappings and the default run directory.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            mapping_channel: String::new(),
            mapping_version: String::new(),
            run_directory: default_run_directory(),
        }
    }
}

/// The plugin as applied to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInstance {
    pub extension: Extension,
    pub project_dir: PathBuf,
    pub build_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl PluginInstance {
    /// Instance for a project, with the build directory at `<project>/build`.
    #[must_use]
    pub fn new(extension: Extension, project_dir: &Path, cache_dir: &Path) -> Self {
        Self {
            extension,
            project_dir: project_dir.to_path_buf(),
            build_dir: project_dir.join("build"),
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    /// Instance described by a loaded config file.
    pub fn from_config(config: &ProjectConfig, project_dir: &Path) -> Result<Self> {
        let cache_dir = config.cache_root(project_dir)?;
        Ok(Self::new(config.minecraft.clone(), project_dir, &cache_dir))
    }

    /// The seven replacements every build context gets.
    #[must_use]
    pub fn standard_replacements(&self) -> Vec<(&'static str, String)> {
        vec![
            (CACHE_DIR, self.cache_dir.display().to_string()),
            (PROJECT_DIR, self.project_dir.display().to_string()),
            (BUILD_DIR, self.build_dir.display().to_string()),
            (MC_VERSION, self.extension.version.clone()),
            (MAPPING_CHANNEL, self.extension.mapping_channel.clone()),
            (MAPPING_VERSION, self.extension.mapping_version.clone()),
            (RUN_DIRECTORY, self.extension.run_directory.clone()),
        ]
    }
}

/// Apply the plugin to `context`.
///
/// Registers the standard replacements, then stores the instance. Applying
/// again overwrites both; call [`ContextRegistry::reset`] first to also drop
/// memoized documents.
pub fn apply(
    registry: &mut ContextRegistry,
    context: BuildContext,
    instance: PluginInstance,
) -> Result<Arc<PluginInstance>> {
    registry.add_replacements(context, instance.standard_replacements())?;

    let instance = Arc::new(instance);
    registry.set_plugin_instance(context, Arc::clone(&instance));

    info!(
        "Applied plugin to {} (Minecraft {}, project {})",
        context,
        instance.extension.version,
        instance.project_dir.display()
    );
    Ok(instance)
}
