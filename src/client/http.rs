//! HTTP client configuration and relay URL wrapping.

use reqwest::Client;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for relay requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Public relay that forwards a target URL and returns its raw body.
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("positively/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Base URL of the forwarding relay
    pub relay_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            relay_url: DEFAULT_RELAY_URL.to_string(),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Create config pointing at a different relay
    #[must_use]
    pub fn with_relay(mut self, relay_url: impl Into<String>) -> Self {
        self.relay_url = relay_url.into();
        self
    }
}

/// Wraps `target` as the `url` query parameter of the relay.
///
/// The target is percent-encoded as a whole, so its own query string reaches
/// the relay intact.
#[must_use]
pub fn relay_url(relay: &str, target: &str) -> String {
    format!(
        "{}?url={}",
        relay.trim_end_matches('/'),
        urlencoding::encode(target)
    )
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error when the client cannot be built
    /// (e.g. TLS backend unavailable).
    pub fn with_config(config: HttpConfig) -> Result<Self, reqwest::Error> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(2)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { inner, config })
    }

    /// Build a relayed GET request for `target`
    pub fn get_via_relay(&self, target: &str) -> reqwest::RequestBuilder {
        let url = relay_url(&self.config.relay_url, target);
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}
