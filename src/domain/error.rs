//! Error types for remote content operations.
//!
//! Every failure that can happen while talking to the relay or decoding what
//! it returns ends up here. None of these errors ever reach the page: the app
//! layer turns them into a fixed fallback message.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for remote content fetches.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport errors from the HTTP client (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The relay answered with a non-success status code.
    #[error("Relay returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input, rejected before any request is made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ContentError {
    /// Create a new parse error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed to parse
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` for failures of the transport itself rather than of the
    /// payload.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
