use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest_cookie_store::{CookieStore, CookieStoreMutex};

/// Cookie-persisting HTTP session shared by every probe in a run.
///
/// reqwest's built-in jar cannot be read back out, so the client is wired to
/// an external store we keep a handle to for the final dump.
pub struct Session {
    client: Client,
    cookies: Arc<CookieStoreMutex>,
}

impl Session {
    /// Creates a session with an empty cookie store.
    pub fn new() -> Result<Self> {
        let cookies = Arc::new(CookieStoreMutex::new(CookieStore::default()));
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, cookies })
    }

    /// The underlying client. Every request sent through it shares the one
    /// cookie store, so a Set-Cookie from one response rides along on the next
    /// request automatically.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Renders the current cookie store for human inspection.
    pub fn cookie_dump(&self) -> String {
        let store = match self.cookies.lock() {
            Ok(store) => store,
            Err(poisoned) => poisoned.into_inner(),
        };

        let entries: Vec<String> = store
            .iter_unexpired()
            .map(|cookie| {
                format!(
                    "{}={} (domain={}, path={})",
                    cookie.name(),
                    cookie.value(),
                    cookie.domain().unwrap_or("host-only"),
                    cookie.path().unwrap_or("/"),
                )
            })
            .collect();

        if entries.is_empty() {
            "(empty)".to_string()
        } else {
            entries.join("; ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_dumps_empty() {
        let session = Session::new().unwrap();
        assert_eq!(session.cookie_dump(), "(empty)");
    }
}
