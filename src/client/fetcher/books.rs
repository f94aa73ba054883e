//! Google Books search.

use serde_json::Value;

use super::ContentFetcher;
use crate::domain::{Book, BookSearch, ContentError};

/// Google Books volumes endpoint.
pub const BOOKS_VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Maximum hits requested per search.
pub const MAX_RESULTS: usize = 10;

impl ContentFetcher {
    /// Searches for books matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidInput` for a blank query, or a transport
    /// or parse error. An empty hit list is `Ok(BookSearch::NoResults)`.
    pub async fn search_books(&self, query: &str) -> Result<BookSearch, ContentError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ContentError::invalid_input("search query is empty"));
        }

        let json = self.get_json(&books_url(query)).await?;
        let result = parse_volumes(&json);
        tracing::info!(
            query,
            found = matches!(result, BookSearch::Found(_)),
            "book search finished"
        );
        Ok(result)
    }
}

/// Builds the volumes target URL.
#[must_use]
pub fn books_url(query: &str) -> String {
    format!(
        "{BOOKS_VOLUMES_URL}?q={}&maxResults={MAX_RESULTS}&printType=books",
        urlencoding::encode(query)
    )
}

/// Parses `{ items: [{ volumeInfo: {...} }] }`. A missing `items` field is
/// how the service reports zero hits.
pub(crate) fn parse_volumes(json: &Value) -> BookSearch {
    let books = json["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| Book::from_volume_info(&item["volumeInfo"]))
                .collect()
        })
        .unwrap_or_default();
    BookSearch::from_books(books)
}
