//! Core types shared by every mcgradle module
//!
//! Currently this is the error layer:
//! - [`McgError`] - Enumerated error types covering every failure mode
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! Library operations return [`Result`], the alias over [`McgError`]. The
//! command layer works with `anyhow::Result` and converts to an
//! [`ErrorContext`] right before printing.

pub mod error;

pub use error::{ErrorContext, McgError, user_friendly_error};

/// Result alias for library operations.
pub type Result<T, E = McgError> = std::result::Result<T, E>;
