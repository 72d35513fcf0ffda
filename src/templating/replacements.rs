//! Per-context table of placeholder replacements.

use std::collections::BTreeMap;

use super::is_valid_name;
use crate::core::{McgError, Result};

/// Mapping from `@NAME@` to its replacement value.
///
/// Names are validated on insertion; values are stored verbatim and may
/// themselves contain further tokens. Ordered so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: BTreeMap<String, String>,
}

impl ReplacementTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register or overwrite a single replacement.
    ///
    /// # Errors
    ///
    /// [`McgError::InvalidReplacementName`] if `name` is not `@UPPER_SNAKE@`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.entries.insert(name, value.into());
        Ok(())
    }

    /// Register several replacements at once.
    ///
    /// Every name is validated before anything is stored, so a bad name
    /// leaves the table untouched.
    pub fn insert_all<I, K, V>(&mut self, replacements: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let staged: Vec<(String, String)> =
            replacements.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        for (name, _) in &staged {
            validate_name(name)?;
        }

        self.entries.extend(staged);
        Ok(())
    }

    /// Look up the value registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(McgError::InvalidReplacementName {
            name: name.to_string(),
        })
    }
}
