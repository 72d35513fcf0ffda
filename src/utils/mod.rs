//! Cross-platform utilities and helpers
//!
//! # Modules
//!
//! - [`checksum`] - File digests (SHA-1 and the SHA-2 family) as hex strings
//! - [`fs`] - Directory creation and atomic file writes for the cache
//! - [`platform`] - Platform-specific cache directory lookup

pub mod checksum;
pub mod fs;
pub mod platform;

pub use checksum::{HashAlgorithm, hash_file, sha1_file};
pub use fs::{atomic_write, ensure_dir, read_text_file};
pub use platform::get_cache_dir;
