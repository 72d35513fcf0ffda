//! Build contexts and the registry of per-context state.
//!
//! Every build invocation gets a [`BuildContext`] handle. All state tied to
//! a build (its replacement table, the applied plugin instance and the
//! memoized remote documents) lives in one [`ContextRegistry`] that callers
//! hold and pass around explicitly. There is no global registry.
//!
//! # Example
//!
//! ```rust,no_run
//! use mcgradle_cli::context::{BuildContext, ContextRegistry};
//!
//! # fn example() -> mcgradle_cli::core::Result<()> {
//! let mut registry = ContextRegistry::new()?;
//! let context = BuildContext::new();
//!
//! registry.add_replacement(context, "@GREETING@", "hello %s")?;
//! let text = registry.resolve(context, "@GREETING@", &["world".into()])?;
//! assert_eq!(text, "hello world");
//! # Ok(())
//! # }
//! ```

mod registry;

use std::fmt;

use uuid::Uuid;

pub use registry::{ContextRegistry, ContextState, VersionMetadata};

/// Opaque identity of one build.
///
/// Cheap to copy; two handles are the same context only if they came from
/// the same [`BuildContext::new`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildContext(Uuid);

impl BuildContext {
    /// Mint a fresh context identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "build context {}", self.0)
    }
}
