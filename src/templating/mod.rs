//! Placeholder substitution for build-context strings
//!
//! Strings anywhere in a build may contain `@UPPER_SNAKE@` tokens that stand
//! for per-context values such as the cache directory or the selected game
//! version. This module expands those tokens against a [`ReplacementTable`]
//! and then applies printf-style positional formatting.
//!
//! # Resolution
//!
//! 1. Scan for `@[A-Z_]+@` tokens. Every token found in a pass must have a
//!    replacement, otherwise resolution fails with
//!    [`McgError::UnresolvedReplacement`](crate::core::McgError::UnresolvedReplacement).
//! 2. Substitute all of them and scan the new string again, so that values
//!    can themselves reference other tokens.
//! 3. Stop when no token remains, or fail with
//!    [`McgError::ExpansionLimitExceeded`](crate::core::McgError::ExpansionLimitExceeded)
//!    after [`MAX_EXPANSION_PASSES`](crate::constants::MAX_EXPANSION_PASSES)
//!    or once the string outgrows
//!    [`MAX_EXPANDED_LENGTH`](crate::constants::MAX_EXPANDED_LENGTH).
//! 4. Apply positional formatting ([`format_positional`]).
//!
//! Resolution builds a fresh string and never exposes partial results.
//!
//! # Example
//!
//! ```rust
//! use mcgradle_cli::templating::{FormatArg, ReplacementTable, render};
//!
//! let mut table = ReplacementTable::new();
//! table.insert("@CACHE_DIR@", "/home/me/.cache/mcgradle")?;
//! table.insert("@MC_VERSION@", "1.12.2")?;
//! table.insert("@JAR@", "@CACHE_DIR@/@MC_VERSION@/client.jar")?;
//!
//! let rendered = render(&table, "@JAR@ (%s)", &[FormatArg::from("client")])?;
//! assert_eq!(rendered, "/home/me/.cache/mcgradle/1.12.2/client.jar (client)");
//! # Ok::<(), mcgradle_cli::core::McgError>(())
//! ```

pub mod format;
pub mod renderer;
pub mod replacements;
pub mod utils;

pub use format::{FormatArg, format_positional};
pub use renderer::{expand, render};
pub use replacements::ReplacementTable;

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Z_]+@").expect("token pattern must compile"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Z_]+@$").expect("name pattern must compile"));

/// Pattern matching a single placeholder token anywhere in a string.
pub fn token_pattern() -> &'static Regex {
    &TOKEN_PATTERN
}

/// Whether `name` is a well-formed replacement name (`@UPPER_SNAKE@`).
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Whether `text` still contains at least one placeholder token.
#[must_use]
pub fn contains_token(text: &str) -> bool {
    TOKEN_PATTERN.is_match(text)
}
