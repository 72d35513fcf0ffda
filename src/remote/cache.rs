//! Fetch-with-disk-cache-and-fallback protocol.
//!
//! A successful fetch is mirrored verbatim to the cache path before it is
//! deserialized. A failed fetch falls back to whatever was mirrored last
//! time, without any freshness check and without retrying the network. With
//! nothing on disk the original fetch error is returned.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::fetcher::DocumentFetcher;
use crate::core::{McgError, Result};
use crate::utils::fs::{atomic_write, read_text_file};

/// Where a loaded document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Fresh from the network, and mirrored to disk.
    Network,
    /// The network failed; served from the last mirrored copy.
    DiskFallback,
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::DiskFallback => f.write_str("disk cache (offline fallback)"),
        }
    }
}

/// A deserialized document plus its on-disk mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedDocument<T> {
    /// The deserialized document.
    pub value: T,
    /// Mirror location on disk.
    pub path: PathBuf,
    /// Whether this load came from the network or the fallback copy.
    pub origin: DocumentOrigin,
}

impl<T> Deref for CachedDocument<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Fetch `url`, mirroring to `cache_path`, or fall back to the mirror.
///
/// Returns the raw body and where it came from.
///
/// # Errors
///
/// - the fetch failed and `cache_path` does not exist: the fetch error
/// - the fetch succeeded but the mirror could not be written: a
///   [`McgError::FileSystemError`] (no fallback in that case)
/// - the fallback copy exists but cannot be read
pub fn fetch_with_fallback(
    fetcher: &dyn DocumentFetcher,
    url: &str,
    cache_path: &Path,
) -> Result<(String, DocumentOrigin)> {
    match fetcher.fetch_text(url) {
        Ok(body) => {
            atomic_write(cache_path, body.as_bytes())?;
            debug!("Cached {} at {}", url, cache_path.display());
            Ok((body, DocumentOrigin::Network))
        }
        Err(fetch_error) => {
            if cache_path.is_file() {
                warn!(
                    "Fetching {} failed ({}); using cached copy {}",
                    url,
                    fetch_error,
                    cache_path.display()
                );
                let body = read_text_file(cache_path)?;
                Ok((body, DocumentOrigin::DiskFallback))
            } else {
                Err(fetch_error)
            }
        }
    }
}

/// [`fetch_with_fallback`] followed by JSON deserialization into `T`.
pub fn load_document<T>(
    fetcher: &dyn DocumentFetcher,
    url: &str,
    cache_path: &Path,
) -> Result<CachedDocument<T>>
where
    T: DeserializeOwned,
{
    let (body, origin) = fetch_with_fallback(fetcher, url, cache_path)?;

    let value = serde_json::from_str(&body).map_err(|e| McgError::InvalidDocument {
        origin: match origin {
            DocumentOrigin::Network => url.to_string(),
            DocumentOrigin::DiskFallback => cache_path.display().to_string(),
        },
        reason: e.to_string(),
    })?;

    info!("Loaded {} from {}", url, origin);
    Ok(CachedDocument {
        value,
        path: cache_path.to_path_buf(),
        origin,
    })
}
