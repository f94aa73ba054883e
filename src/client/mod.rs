//! HTTP clients for the third-party content services.
//!
//! All services are reached through a public forwarding relay:
//! - Quotable - paged quotes filtered by tag
//! - ZenQuotes - batches of random quotes
//! - affirmations.dev - a single random affirmation
//! - Google Books - volume search
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ContentFetcher, HttpConfig};
//!
//! let fetcher = ContentFetcher::new(HttpConfig::default())?;
//! let text = fetcher.random_affirmation().await;
//! ```

pub mod fetcher;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use fetcher::ContentFetcher;
pub use http::{DEFAULT_RELAY_URL, DEFAULT_TIMEOUT_SECS, HttpConfig};
