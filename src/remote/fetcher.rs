//! Retrieval of remote documents as text.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::constants::{DEFAULT_HTTP_TIMEOUT, USER_AGENT};
use crate::core::{McgError, Result};

/// Source of remote document bodies.
///
/// The document cache only needs "give me the body behind this URL"; keeping
/// it behind a trait lets callers swap the HTTP client for an offline or
/// recording implementation.
pub trait DocumentFetcher {
    /// Fetch the full body behind `url` as text.
    ///
    /// Any error returned here is treated as a fetch failure and triggers the
    /// on-disk fallback.
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher that identifies itself with a fixed `User-Agent`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher sending `user_agent` and giving up after `timeout`.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| McgError::NetworkError {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
        })
    }

    /// Fetcher with the default user agent and timeout.
    pub fn with_defaults() -> Result<Self> {
        Self::new(USER_AGENT, DEFAULT_HTTP_TIMEOUT)
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let network_error = |e: reqwest::Error| McgError::NetworkError {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(network_error)?;
        let response = response.error_for_status().map_err(network_error)?;
        response.text().map_err(network_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_sends_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/manifest.json")
            .match_header("user-agent", "mcgradle-test")
            .with_status(200)
            .with_body(r#"{"versions":[]}"#)
            .create();

        let fetcher = HttpFetcher::new("mcgradle-test", Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch_text(&format!("{}/manifest.json", server.url())).unwrap();

        assert_eq!(body, r#"{"versions":[]}"#);
        mock.assert();
    }

    #[test]
    fn test_http_error_status_is_network_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing.json").with_status(404).create();

        let fetcher = HttpFetcher::with_defaults().unwrap();
        let url = format!("{}/missing.json", server.url());
        let err = fetcher.fetch_text(&url).unwrap_err();

        match err {
            McgError::NetworkError { url: failed, reason } => {
                assert_eq!(failed, url);
                assert!(reason.contains("404"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let fetcher = HttpFetcher::new("mcgradle-test", Duration::from_secs(2)).unwrap();
        let err = fetcher.fetch_text("http://127.0.0.1:1/manifest.json").unwrap_err();
        assert!(matches!(err, McgError::NetworkError { .. }));
    }
}
