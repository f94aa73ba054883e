//! Book search result types.

use serde_json::Value;

/// Title used when the volume has none.
pub const UNTITLED: &str = "Untitled";

/// Link used when the volume carries neither an info nor a preview link.
pub const NO_LINK: &str = "#";

// ============================================================================
// Book
// ============================================================================

/// A single book search hit, reduced to what the results view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub link: String,
}

impl Book {
    /// Builds a book from a Google Books `volumeInfo` object.
    ///
    /// Missing fields fall back the same way the results list always has:
    /// `"Untitled"` for the title, `infoLink` then `previewLink` then `"#"`
    /// for the link.
    #[must_use]
    pub fn from_volume_info(info: &Value) -> Self {
        let title = info["title"]
            .as_str()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let authors = info["authors"].as_array().map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect::<Vec<_>>()
        });
        let authors = authors.filter(|list| !list.is_empty());

        let description = info["description"]
            .as_str()
            .filter(|d| !d.is_empty())
            .map(String::from);

        let link = info["infoLink"]
            .as_str()
            .or_else(|| info["previewLink"].as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or(NO_LINK)
            .to_string();

        Self {
            title,
            authors,
            description,
            link,
        }
    }

    /// `"by A, B"` when authors are known.
    #[must_use]
    pub fn byline(&self) -> Option<String> {
        self.authors
            .as_ref()
            .map(|authors| format!("by {}", authors.join(", ")))
    }

    /// Whether the link can actually be opened.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.link != NO_LINK
    }
}

// ============================================================================
// Search Outcome
// ============================================================================

/// Result of a successful search. An empty hit list is its own variant so the
/// view can tell "nothing found" apart from a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSearch {
    Found(Vec<Book>),
    NoResults,
}

impl BookSearch {
    /// Wraps a hit list, mapping an empty list to `NoResults`.
    #[must_use]
    pub fn from_books(books: Vec<Book>) -> Self {
        if books.is_empty() {
            Self::NoResults
        } else {
            Self::Found(books)
        }
    }
}
