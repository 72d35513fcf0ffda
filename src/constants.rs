//! Global constants used throughout the mcgradle codebase.
//!
//! Remote endpoints, cache layout templates, the standard placeholder names
//! and numeric limits live here so that magic values are discoverable in one
//! place.

use std::time::Duration;

/// Well-known location of the version manifest.
pub const VERSION_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// Identifying `User-Agent` sent with every document request.
pub const USER_AGENT: &str = concat!("mcgradle/", env!("CARGO_PKG_VERSION"));

/// Default timeout for document requests (30 seconds).
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// On-disk mirror of the version manifest, resolved through the context.
pub const VERSION_MANIFEST_LOCATION: &str = "@CACHE_DIR@/version_manifest.json";

/// On-disk mirror of the per-version metadata document.
pub const VERSION_DATA_LOCATION: &str = "@CACHE_DIR@/versions/@MC_VERSION@/version.json";

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "mcgradle.toml";

/// Environment variable overriding the cache root directory.
pub const CACHE_DIR_ENV: &str = "MCGRADLE_CACHE_DIR";

/// Upper bound on placeholder re-scan passes.
///
/// Each pass substitutes every token present in the string. Legitimate
/// multi-level expansion settles in a handful of passes; hitting this limit
/// means a replacement keeps reintroducing tokens.
pub const MAX_EXPANSION_PASSES: usize = 32;

/// Upper bound, in bytes, on a string produced by placeholder expansion.
///
/// A value that references its own token more than once doubles the string
/// on every pass, long before the pass limit is reached.
pub const MAX_EXPANDED_LENGTH: usize = 1 << 20;

/// Maximum Levenshtein distance, as a percentage of the requested name's
/// length, for "did you mean" suggestions.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Cache root directory.
pub const CACHE_DIR: &str = "@CACHE_DIR@";
/// Project root directory.
pub const PROJECT_DIR: &str = "@PROJECT_DIR@";
/// Selected game version string.
pub const MC_VERSION: &str = "@MC_VERSION@";
/// Mapping channel (e.g. `snapshot`, `stable`).
pub const MAPPING_CHANNEL: &str = "@MAPPING_CHANNEL@";
/// Mapping version within the channel.
pub const MAPPING_VERSION: &str = "@MAPPING_VERSION@";
/// Directory the game is launched from during development runs.
pub const RUN_DIRECTORY: &str = "@RUN_DIRECTORY@";
/// Build output directory.
pub const BUILD_DIR: &str = "@BUILD_DIR@";
