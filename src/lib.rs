//! mcgradle - per-project build configuration and cached version metadata
//!
//! The configuration-and-caching layer of a Minecraft build plugin. Each
//! build gets a context with its own table of `@NAME@` placeholders, and
//! two remote JSON documents (the version manifest and the metadata of the
//! configured version) are fetched once, mirrored to disk and served from
//! that mirror when the network is unavailable.
//!
//! # Core Modules
//!
//! - [`context`] - Build contexts and the [`ContextRegistry`](context::ContextRegistry)
//!   holding their replacements, plugin instance and loaded documents
//! - [`templating`] - Placeholder expansion and positional formatting
//! - [`remote`] - Fetch-with-disk-cache-and-fallback for JSON documents
//! - [`version`] - Version manifest model and version-derived feature flags
//! - [`plugin`] - The plugin instance and the standard replacements
//!
//! ## Supporting Modules
//!
//! - [`cli`] - The `mcgradle` command line
//! - [`config`] - `mcgradle.toml` parsing
//! - [`constants`] - Well-known URLs, cache locations and token names
//! - [`core`] - Error types and user-facing error formatting
//! - [`utils`] - File digests, atomic writes and cache directory lookup
//!
//! # Example
//!
//! ```rust,no_run
//! use mcgradle_cli::config::ProjectConfig;
//! use mcgradle_cli::context::{BuildContext, ContextRegistry};
//! use mcgradle_cli::plugin::{self, PluginInstance};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let project = Path::new(".");
//! let config = ProjectConfig::load(&project.join("mcgradle.toml"))?;
//!
//! let mut registry = ContextRegistry::from_network_config(&config.network)?;
//! let context = BuildContext::new();
//! plugin::apply(&mut registry, context, PluginInstance::from_config(&config, project)?)?;
//!
//! let jar = registry.resolve(context, "@CACHE_DIR@/versions/@MC_VERSION@/%s.jar", &["client".into()])?;
//! let metadata = registry.version_metadata(context)?;
//! println!("{jar} ({} keys of metadata)", metadata.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod core;
pub mod plugin;
pub mod remote;
pub mod templating;
pub mod utils;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
