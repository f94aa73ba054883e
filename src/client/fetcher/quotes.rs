//! Quote endpoints: Quotable pages and ZenQuotes batches.

use serde_json::Value;

use super::ContentFetcher;
use crate::domain::{ContentError, QuotesPage, format_quote};

/// Quotable listing endpoint.
pub const QUOTABLE_QUOTES_URL: &str = "https://api.quotable.io/quotes";

/// ZenQuotes batch endpoint.
pub const ZENQUOTES_BATCH_URL: &str = "https://zenquotes.io/api/quotes";

impl ContentFetcher {
    /// Fetches one page of quotes, optionally filtered by tags (any-of).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// without a `results` array.
    pub async fn quotes_page(
        &self,
        page: usize,
        page_size: usize,
        tags: &[String],
    ) -> Result<QuotesPage, ContentError> {
        let json = self.get_json(&quotable_url(page, page_size, tags)).await?;
        let parsed = parse_quotable_page(&json)?;
        tracing::info!(page, total_pages = parsed.total_pages, "quotes page loaded");
        Ok(parsed)
    }

    /// Fetches a batch of random quotes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the body is not an
    /// array of `{q, a}` objects.
    pub async fn quote_batch(&self) -> Result<Vec<String>, ContentError> {
        let json = self.get_json(ZENQUOTES_BATCH_URL).await?;
        parse_zen_batch(&json)
    }
}

/// Builds the Quotable target URL.
#[must_use]
pub fn quotable_url(page: usize, page_size: usize, tags: &[String]) -> String {
    let mut url = format!("{QUOTABLE_QUOTES_URL}?page={page}&limit={page_size}");
    let tags: Vec<&str> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if !tags.is_empty() {
        url.push_str("&tags=");
        url.push_str(&tags.join("|"));
    }
    url
}

/// Parses `{ results: [{content, author}], totalPages }`.
pub(crate) fn parse_quotable_page(json: &Value) -> Result<QuotesPage, ContentError> {
    let results = json["results"]
        .as_array()
        .ok_or_else(|| ContentError::parse("quotes response has no results array"))?;

    let items = results
        .iter()
        .filter_map(|entry| {
            let content = entry["content"].as_str()?;
            let author = entry["author"].as_str().unwrap_or_default();
            Some(format_quote(content, author))
        })
        .collect();

    let total_pages = json["totalPages"]
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(1)
        .max(1);

    Ok(QuotesPage { items, total_pages })
}

/// Parses `[{q, a}]`.
pub(crate) fn parse_zen_batch(json: &Value) -> Result<Vec<String>, ContentError> {
    let entries = json
        .as_array()
        .ok_or_else(|| ContentError::parse("quote batch is not an array"))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let text = entry["q"].as_str()?;
            Some(format_quote(text, entry["a"].as_str().unwrap_or_default()))
        })
        .collect())
}
