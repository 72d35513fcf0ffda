//! Project configuration.
//!
//! A build is configured by an `mcgradle.toml` file at the project root
//! (or any path passed with `--config`):
//!
//! ```toml
//! [minecraft]
//! version = "1.12.2"          # required
//! mapping_channel = "snapshot"
//! mapping_version = "20171003"
//! run_directory = "run"       # default "run"
//!
//! [cache]
//! dir = "/home/me/.cache/mcgradle"   # default: $MCGRADLE_CACHE_DIR or platform cache dir
//!
//! [network]
//! manifest_url = "https://launchermeta.mojang.com/mc/game/version_manifest.json"
//! user_agent = "mcgradle/0.3.0"
//! timeout_secs = 30
//! ```
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing with file-path error context
//! - `project` - The [`ProjectConfig`] structure and its sections

mod parser;
mod project;

pub use parser::parse_config;
pub use project::{CacheConfig, NetworkConfig, ProjectConfig};
