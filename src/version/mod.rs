//! Version manifest types and version-derived feature flags.
//!
//! # Module Organization
//!
//! - [`manifest`] - The remote manifest listing every known version and the
//!   URL of its metadata document
//! - [`features`] - Toolchain switches derived from a version string
//!
//! The manifest is deserialized leniently: fields this crate does not use
//! (release timestamps and similar) are ignored, and no schema validation is
//! performed beyond what deserialization requires.

pub mod features;
pub mod manifest;

pub use features::VersionFeatures;
pub use manifest::{LatestVersions, VersionDescriptor, VersionManifest};
