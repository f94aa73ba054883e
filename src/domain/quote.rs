//! Quote formatting shared by the local catalog and the remote services.

/// Formats a quote with its attribution, matching the catalog style
/// `"{content} – {author}"`. A blank author leaves the content alone.
#[must_use]
pub fn format_quote(content: &str, author: &str) -> String {
    let content = content.trim();
    let author = author.trim();
    if author.is_empty() {
        content.to_string()
    } else {
        format!("{content} – {author}")
    }
}

/// One page of quotes as reported by the quotes service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotesPage {
    /// Formatted quotes on this page.
    pub items: Vec<String>,
    /// Total pages the service reports, never less than 1.
    pub total_pages: usize,
}
