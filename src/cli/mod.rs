//! Command-line interface for mcgradle.
//!
//! The binary is a thin front end over the library: every project-bound
//! command loads `mcgradle.toml`, applies the plugin to a fresh build
//! context and then works through the [`ContextRegistry`](crate::context::ContextRegistry).
//!
//! # Commands
//!
//! - `resolve <TEMPLATE> [ARGS]...` - resolve a template against the project
//! - `versions [--type KIND]` - list the version manifest
//! - `version-info [--key KEY]` - show the configured version's metadata
//! - `hash <FILE> [--algorithm NAME]` - print a file digest
//! - `cache info` / `cache clean` - inspect or delete the cached documents
//!
//! # Global Options
//!
//! - `-v, --verbose` - debug logging
//! - `-q, --quiet` - errors only
//! - `-c, --config <FILE>` - config file instead of `<project>/mcgradle.toml`
//! - `--project-dir <DIR>` - project root (default: current directory)
//!
//! Logs go to stderr so command output on stdout can be piped.

mod cache;
mod common;
mod hash;
mod resolve;
mod versions;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use common::{ProjectOptions, ProjectSession};

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter to force. `None` defers to `RUST_LOG`, then `info`.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter the subscriber will use.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }

    /// Install the global tracing subscriber writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Per-project placeholder resolution and cached version metadata.
#[derive(Parser, Debug)]
#[command(
    name = "mcgradle",
    about = "Resolve build placeholders and cached version metadata for a Minecraft project",
    version,
    long_about = "mcgradle resolves @NAME@ placeholders for a project and keeps a local mirror of the \
                  version manifest and per-version metadata, falling back to it when offline."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file to use instead of `<project-dir>/mcgradle.toml`
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project root directory
    #[arg(long, global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a template against the project's replacements
    Resolve(resolve::ResolveCommand),
    /// List versions from the version manifest
    Versions(versions::VersionsCommand),
    /// Show the metadata document of the configured version
    VersionInfo(versions::VersionInfoCommand),
    /// Print the hex digest of a file
    Hash(hash::HashCommand),
    /// Inspect or clear the cached documents
    Cache(cache::CacheCommand),
}

impl Cli {
    /// Set up logging from the global flags and run the command.
    pub fn execute(self) -> Result<()> {
        self.build_config().init_logging();

        let options = ProjectOptions {
            config: self.config,
            project_dir: self.project_dir,
        };

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&options),
            Commands::Versions(cmd) => cmd.execute(&options),
            Commands::VersionInfo(cmd) => cmd.execute(&options),
            Commands::Hash(cmd) => cmd.execute(),
            Commands::Cache(cmd) => cmd.execute(&options),
        }
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
        }
    }
}
