//! Remote JSON documents with an on-disk mirror.
//!
//! Every remote document (the version manifest, per-version metadata) is
//! loaded through [`load_document`]: fetch over HTTP, mirror the body to a
//! file under the cache root, and fall back to that mirror when the network
//! is unavailable.
//!
//! # Modules
//!
//! - [`fetcher`] - The [`DocumentFetcher`] seam and its blocking HTTP implementation
//! - [`cache`] - The fetch-mirror-fallback protocol and [`CachedDocument`]

pub mod cache;
pub mod fetcher;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use cache::{CachedDocument, DocumentOrigin, fetch_with_fallback, load_document};
pub use fetcher::{DocumentFetcher, HttpFetcher};
