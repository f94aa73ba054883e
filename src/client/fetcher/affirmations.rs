//! affirmations.dev endpoint.

use serde_json::Value;

use super::ContentFetcher;
use crate::domain::ContentError;

/// Single random affirmation endpoint.
pub const AFFIRMATIONS_URL: &str = "https://www.affirmations.dev/";

/// Shown when the service answers without an affirmation.
pub const DEFAULT_AFFIRMATION: &str = "Stay positive and keep going!";

/// Shown when the request itself fails.
pub const AFFIRMATION_FAILED: &str =
    "Could not load an affirmation at this time. Please try again later.";

impl ContentFetcher {
    /// Fetches a random affirmation. Never fails: a missing field yields
    /// [`DEFAULT_AFFIRMATION`] and any error yields [`AFFIRMATION_FAILED`].
    pub async fn random_affirmation(&self) -> String {
        match self.try_random_affirmation().await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    %err,
                    transport = err.is_transport(),
                    "affirmation fetch failed"
                );
                AFFIRMATION_FAILED.to_string()
            }
        }
    }

    /// Fallible variant of [`Self::random_affirmation`].
    ///
    /// # Errors
    ///
    /// Returns an error on transport or JSON failure.
    pub async fn try_random_affirmation(&self) -> Result<String, ContentError> {
        let json = self.get_json(AFFIRMATIONS_URL).await?;
        Ok(affirmation_text(&json))
    }
}

/// Extracts `affirmation`, falling back to the default text.
pub(crate) fn affirmation_text(json: &Value) -> String {
    json["affirmation"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_AFFIRMATION)
        .to_string()
}
