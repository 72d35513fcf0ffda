//! Error handling for mcgradle
//!
//! This module provides the strongly-typed error enum used by every library
//! operation and the user-facing wrapper the CLI prints on failure.
//!
//! # Architecture
//!
//! - [`McgError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! - **Invalid argument**: [`McgError::InvalidReplacementName`],
//!   [`McgError::UnsupportedAlgorithm`], [`McgError::InvalidFormat`]
//! - **Missing configuration**: [`McgError::NotInitialized`]
//! - **Unresolvable reference**: [`McgError::UnresolvedReplacement`],
//!   [`McgError::UnknownVersion`], [`McgError::ExpansionLimitExceeded`]
//! - **I/O**: [`McgError::FileSystemError`]
//! - **Network**: [`McgError::NetworkError`]
//!
//! Network errors are only recovered from inside the remote document cache,
//! where a previously persisted copy can stand in for the live document.
//! Everything else propagates straight to the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mcgradle_cli::core::{McgError, user_friendly_error};
//!
//! let error = McgError::UnknownVersion {
//!     id: "1.14".to_string(),
//!     suggestions: vec!["1.13".to_string()],
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for mcgradle operations
///
/// Every variant names the offending identifier (placeholder, version id,
/// path or URL) so that messages are actionable without extra context.
#[derive(Error, Debug)]
pub enum McgError {
    /// A replacement name did not have the `@NAME@` shape
    ///
    /// Names must start and end with `@` and contain only uppercase ASCII
    /// letters and underscores in between.
    #[error("Invalid replacement name {name}")]
    InvalidReplacementName {
        /// The rejected name
        name: String,
    },

    /// The requested digest algorithm is not supported
    #[error("Unsupported hash algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The algorithm name as given by the caller
        algorithm: String,
    },

    /// Positional formatting of a resolved string failed
    #[error("Invalid format string '{template}': {reason}")]
    InvalidFormat {
        /// The fully substituted string that was being formatted
        template: String,
        /// What went wrong
        reason: String,
    },

    /// No plugin instance was registered for the build context
    ///
    /// The plugin instance carries the configured version strings, so nearly
    /// every lookup requires it.
    #[error("Build context is not set up yet")]
    NotInitialized,

    /// A placeholder token has no registered replacement
    #[error("Invalid replacement {token}")]
    UnresolvedReplacement {
        /// The token that could not be resolved, including the `@` markers
        token: String,
        /// Registered names that look similar to `token`
        suggestions: Vec<String>,
    },

    /// The configured version is not listed in the version manifest
    #[error("Unknown version {id}")]
    UnknownVersion {
        /// The requested version id
        id: String,
        /// Manifest ids that look similar to `id`
        suggestions: Vec<String>,
    },

    /// Placeholder expansion did not settle within the pass or length limit
    ///
    /// Raised when a replacement value keeps reintroducing tokens, most
    /// commonly because a value references its own name.
    #[error("Placeholder expansion of '{template}' did not settle (stopped after {passes} passes)")]
    ExpansionLimitExceeded {
        /// The original template
        template: String,
        /// Number of passes performed before giving up
        passes: usize,
    },

    /// A version string could not be split into numeric components
    #[error("Invalid version string: {version}")]
    InvalidVersion {
        /// The rejected version string
        version: String,
    },

    /// A filesystem operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The operation being performed (e.g. "create directory")
        operation: String,
        /// The path involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A network request failed
    #[error("Network error fetching {url}: {reason}")]
    NetworkError {
        /// The requested URL
        url: String,
        /// Failure description from the HTTP client
        reason: String,
    },

    /// A fetched or cached document could not be deserialized
    #[error("Invalid document {origin}: {reason}")]
    InvalidDocument {
        /// URL or path the document came from
        origin: String,
        /// Deserializer message
        reason: String,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },
}

impl McgError {
    /// Build a [`McgError::FileSystemError`] for `operation` on `path`.
    pub fn io(operation: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::FileSystemError {
            operation: operation.into(),
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// Pairs a [`McgError`] with an optional suggestion and optional details.
/// The CLI prints this on failure instead of the raw error chain.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: McgError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: McgError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`McgError`] anywhere in the error chain and
/// [`std::io::Error`] at the root. Anything else is reported as a
/// configuration error carrying the full `anyhow` chain as its message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let details = chain_details(&error);

    // Take ownership when the root is ours so the io source is preserved
    let error = match error.downcast::<McgError>() {
        Ok(mcg_error) => return with_details(create_error_context(mcg_error), details),
        Err(other) => other,
    };

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let context = with_details(
            ErrorContext::new(McgError::FileSystemError {
                operation: "file access".to_string(),
                path: PathBuf::from("unknown"),
                source: std::io::Error::new(io_error.kind(), io_error.to_string()),
            }),
            details,
        );
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => context
                .with_suggestion("Check file ownership and permissions of the cache and project directories"),
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => context,
        };
    }

    for cause in error.chain() {
        if let Some(mcg_error) = cause.downcast_ref::<McgError>() {
            let context = ErrorContext::new(McgError::ConfigError {
                message: format!("{error:#}"),
            });
            return match suggestion_for(mcg_error) {
                Some(suggestion) => context.with_suggestion(suggestion),
                None => context,
            };
        }
    }

    ErrorContext::new(McgError::ConfigError {
        message: format!("{error:#}"),
    })
}

fn chain_details(error: &anyhow::Error) -> Option<String> {
    if error.chain().count() > 1 {
        Some(format!("{error:#}"))
    } else {
        None
    }
}

fn with_details(context: ErrorContext, details: Option<String>) -> ErrorContext {
    match details {
        Some(details) if context.details.is_none() => context.with_details(details),
        _ => context,
    }
}

fn create_error_context(error: McgError) -> ErrorContext {
    let suggestion = suggestion_for(&error);
    let details = match &error {
        McgError::FileSystemError { source, .. } => Some(source.to_string()),
        McgError::ExpansionLimitExceeded { .. } => {
            Some("A replacement value probably references its own placeholder".to_string())
        }
        _ => None,
    };

    let mut context = ErrorContext::new(error);
    if let Some(suggestion) = suggestion {
        context = context.with_suggestion(suggestion);
    }
    if let Some(details) = details {
        context = context.with_details(details);
    }
    context
}

fn suggestion_for(error: &McgError) -> Option<String> {
    match error {
        McgError::InvalidReplacementName { .. } => {
            Some("Replacement names look like @UPPER_SNAKE@".to_string())
        }
        McgError::UnsupportedAlgorithm { .. } => {
            Some("Use one of SHA-1, SHA-224, SHA-256, SHA-384, SHA-512".to_string())
        }
        McgError::NotInitialized => {
            Some("Make sure mcgradle.toml exists and has a [minecraft] version".to_string())
        }
        McgError::UnresolvedReplacement { suggestions, .. }
        | McgError::UnknownVersion { suggestions, .. }
            if !suggestions.is_empty() =>
        {
            Some(format!("Did you mean: {}?", suggestions.join(", ")))
        }
        McgError::UnknownVersion { .. } => {
            Some("Run 'mcgradle versions' to list known versions".to_string())
        }
        McgError::NetworkError { .. } => Some(
            "Check your connection; once a document has been fetched it is served from the cache"
                .to_string(),
        ),
        _ => None,
    }
}
