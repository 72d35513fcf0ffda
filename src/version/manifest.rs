//! Version manifest document model.

use serde::{Deserialize, Serialize};

use crate::core::{McgError, Result};
use crate::templating::utils::find_similar;

/// One version listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionDescriptor {
    /// Version id, e.g. `"1.12.2"` or `"17w45a"`.
    pub id: String,
    /// Release channel tag such as `release` or `snapshot`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of this version's metadata document.
    pub url: String,
}

/// Latest release and snapshot ids, when the manifest carries them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatestVersions {
    pub release: String,
    pub snapshot: String,
}

/// The manifest listing all known versions.
///
/// Equality and hashing are structural over the ordered version list, so two
/// manifests are equal exactly when they list the same descriptors in the
/// same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<LatestVersions>,
    pub versions: Vec<VersionDescriptor>,
}

impl VersionManifest {
    /// First descriptor whose id equals `id` exactly.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&VersionDescriptor> {
        self.versions.iter().find(|version| version.id == id)
    }

    /// Like [`find`](Self::find) but fails with [`McgError::UnknownVersion`].
    ///
    /// The error carries up to three similar ids from the manifest.
    pub fn require(&self, id: &str) -> Result<&VersionDescriptor> {
        self.find(id).ok_or_else(|| McgError::UnknownVersion {
            id: id.to_string(),
            suggestions: find_similar(id, self.ids()),
        })
    }

    /// All version ids in manifest order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|version| version.id.as_str())
    }

    /// Descriptors whose type tag equals `kind`, in manifest order.
    pub fn of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a VersionDescriptor> {
        self.versions.iter().filter(move |version| version.kind == kind)
    }
}
