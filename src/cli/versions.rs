//! `mcgradle versions` and `mcgradle version-info`.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use serde_json::Value;
use tracing::info;

use super::common::{ProjectOptions, ProjectSession};

/// List the versions in the version manifest.
#[derive(Args, Debug)]
pub struct VersionsCommand {
    /// Only list versions of this type (e.g. `release`, `snapshot`)
    #[arg(long = "type", value_name = "KIND")]
    kind: Option<String>,
}

impl VersionsCommand {
    pub fn execute(self, options: &ProjectOptions) -> Result<()> {
        let mut session = ProjectSession::open(options)?;
        let manifest = session
            .registry
            .version_manifest(session.context)
            .context("Failed to load the version manifest")?;

        info!("Version manifest from {} ({})", manifest.origin, manifest.path.display());

        let listed: Vec<_> = match &self.kind {
            Some(kind) => manifest.of_type(kind).collect(),
            None => manifest.versions.iter().collect(),
        };
        for version in listed {
            println!("{}\t{}", version.id, version.kind);
        }
        Ok(())
    }
}

/// Print the metadata document of the configured version.
#[derive(Args, Debug)]
pub struct VersionInfoCommand {
    /// Print only this top-level key
    #[arg(long)]
    key: Option<String>,
}

impl VersionInfoCommand {
    pub fn execute(self, options: &ProjectOptions) -> Result<()> {
        let mut session = ProjectSession::open(options)?;
        let version = session.instance.extension.version.clone();
        let metadata = session
            .registry
            .version_metadata(session.context)
            .with_context(|| format!("Failed to load metadata for version {version}"))?;

        info!("Version {} metadata from {}", version, metadata.origin);

        match &self.key {
            Some(key) => {
                let value = metadata
                    .get(key)
                    .ok_or_else(|| anyhow!("Version {version} metadata has no key '{key}'"))?;
                match value {
                    Value::String(text) => println!("{text}"),
                    other => println!("{}", serde_json::to_string_pretty(other)?),
                }
            }
            None => println!("{}", serde_json::to_string_pretty(&metadata.value)?),
        }
        Ok(())
    }
}
