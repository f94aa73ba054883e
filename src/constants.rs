//! Application constants: timing, layout dimensions, and the fixed messages
//! shown in place of remote content.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Interval between redraws and toast countdown ticks.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Ticks a toast stays on screen (2 seconds at [`TICK_RATE`]).
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the header with the page tabs (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer with key hints (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of a single-text slot: borders plus two wrapped lines.
pub const TEXT_SLOT_HEIGHT: u16 = 4;

// ============================================================================
// Fixed Messages
// ============================================================================

/// Shown while a single-text slot waits for its content.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown while a quotes page is loading.
pub const QUOTES_LOADING_MESSAGE: &str = "Loading quotes...";

/// Shown while a book search is running.
pub const SEARCHING_MESSAGE: &str = "Searching...";

/// Shown when a quotes page cannot be loaded.
pub const QUOTES_FAILED: &str = "An error occurred while loading quotes. Please try again later.";

/// Shown when a book search returns no hits.
pub const BOOKS_NONE: &str = "No books found for your search.";

/// Shown when a book search fails.
pub const BOOKS_FAILED: &str =
    "An error occurred while searching for books. Please try again later.";

/// Shown instead of searching when offline.
pub const BOOKS_OFFLINE: &str = "Book search is unavailable in offline mode.";

/// Placeholder in the random affirmation slot before the first request.
pub const AFFIRMATION_PROMPT: &str = "Press a for a fresh affirmation.";

/// Placeholder in the book results slot before the first search.
pub const BOOKS_PROMPT: &str = "Press / to search for books.";

/// Shown when a book has no usable link.
pub const NO_LINK_MESSAGE: &str = "This book has no link to open.";
