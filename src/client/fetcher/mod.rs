//! Remote content fetcher.
//!
//! Every call goes through the relay, makes exactly one attempt, and returns
//! either typed content or a [`ContentError`]. Nothing here retries and
//! nothing here decides what the user sees on failure; that is the app
//! layer's job.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ContentFetcher, HttpConfig};
//!
//! let fetcher = ContentFetcher::new(HttpConfig::default())?;
//! let page = fetcher.quotes_page(1, 5, &["inspirational".into()]).await?;
//! ```

use serde_json::Value;

use super::http::{HttpClient, HttpConfig};
use crate::domain::ContentError;

mod affirmations;
mod books;
mod quotes;


// ============================================================================
// Content Fetcher
// ============================================================================

#[derive(Debug, Clone)]
pub struct ContentFetcher {
    http: HttpClient,
}

impl ContentFetcher {
    /// Creates a fetcher with the given HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Network` if the HTTP client fails to initialize.
    pub fn new(config: HttpConfig) -> Result<Self, ContentError> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }

    /// GETs `target` through the relay and parses the body as JSON.
    pub(crate) async fn get_json(&self, target: &str) -> Result<Value, ContentError> {
        tracing::debug!(target, "relay request");
        let response = self.http.get_via_relay(target).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ContentError::parse(e.to_string()))
    }
}
