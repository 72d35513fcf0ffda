//! In-memory [`DocumentFetcher`] for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::fetcher::DocumentFetcher;
use crate::core::{McgError, Result};

/// Serves canned bodies by URL and records every request.
///
/// Clones share state, so a test can hand one clone to a registry and keep
/// another to flip the network off or inspect requests.
#[derive(Debug, Clone, Default)]
pub struct StubFetcher {
    bodies: Rc<RefCell<HashMap<String, String>>>,
    online: Rc<Cell<bool>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl StubFetcher {
    /// An online fetcher with no documents.
    pub fn new() -> Self {
        let stub = Self::default();
        stub.online.set(true);
        stub
    }

    /// A fetcher that fails every request.
    pub fn offline() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    #[must_use]
    pub fn with(self, url: &str, body: &str) -> Self {
        self.bodies.borrow_mut().insert(url.to_string(), body.to_string());
        self
    }

    pub fn set_online(&self, online: bool) {
        self.online.set(online);
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl DocumentFetcher for StubFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());

        if !self.online.get() {
            return Err(McgError::NetworkError {
                url: url.to_string(),
                reason: "network unavailable".to_string(),
            });
        }

        self.bodies.borrow().get(url).cloned().ok_or_else(|| McgError::NetworkError {
            url: url.to_string(),
            reason: "HTTP status client error (404 Not Found)".to_string(),
        })
    }
}
