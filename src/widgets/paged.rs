//! Paged list rendering: page state, windowing, and the page control row.
//!
//! A [`PagedList`] owns its full source sequence and a [`PageState`]. Only the
//! current window is shown, but switching pages never discards the source.
//! [`RemotePager`] is the server-paged counterpart: it only ever holds one
//! page of items and takes the page count from the service.

use std::ops::Range;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

/// Items per page when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Number of pages needed for `total_items`, never less than one.
#[must_use]
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

// ============================================================================
// Page Controls
// ============================================================================

/// One numbered page selector. The control for the current page is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub page: usize,
    pub disabled: bool,
}

impl PageControl {
    #[must_use]
    pub fn label(&self) -> String {
        self.page.to_string()
    }
}

/// Builds the control row `1..=total_pages`, disabling `current_page`.
#[must_use]
pub fn page_controls(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    (1..=total_pages.max(1))
        .map(|page| PageControl {
            page,
            disabled: page == current_page,
        })
        .collect()
}

/// Renders a control row as a single styled line, e.g. ` 1 [2] 3 `.
#[must_use]
pub fn controls_line(controls: &[PageControl]) -> Line<'static> {
    let spans: Vec<Span<'static>> = controls
        .iter()
        .map(|control| {
            if control.disabled {
                Span::styled(
                    format!("[{}]", control.label()),
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!(" {} ", control.label()),
                    Style::default().fg(MUTED_COLOR),
                )
            }
        })
        .collect();
    Line::from(spans)
}

// ============================================================================
// PageState
// ============================================================================

/// Paging state for one rendered list.
///
/// `1 <= current_page <= total_pages()` holds for every reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl PageState {
    /// Creates state on page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Index range of the current window, clamped to the source bounds.
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        self.window_for(self.current_page)
    }

    /// Index range of an arbitrary page, clamped to the source bounds.
    #[must_use]
    pub fn window_for(&self, page: usize) -> Range<usize> {
        let start = page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        let end = start
            .saturating_add(self.items_per_page)
            .min(self.total_items);
        start..end
    }

    /// Activates the control for `page`.
    ///
    /// Returns `false` and leaves the state untouched when `page` is out of
    /// range or is already current (its control is disabled).
    pub fn select(&mut self, page: usize) -> bool {
        if page == self.current_page || page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// The control row for the current state.
    #[must_use]
    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.total_pages())
    }
}

// ============================================================================
// PagedList
// ============================================================================

/// A local sequence shown one window at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList {
    items: Vec<String>,
    state: PageState,
}

impl PagedList {
    #[must_use]
    pub fn new(items: Vec<String>, items_per_page: usize) -> Self {
        let state = PageState::new(items.len(), items_per_page);
        Self { items, state }
    }

    /// The full source sequence.
    #[cfg(test)]
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// Items in the current window. Empty when the source is empty.
    #[must_use]
    pub fn visible(&self) -> &[String] {
        &self.items[self.state.window()]
    }

    #[must_use]
    pub fn controls(&self) -> Vec<PageControl> {
        self.state.controls()
    }

    /// Activates a page control; see [`PageState::select`].
    pub fn activate(&mut self, page: usize) -> bool {
        let changed = self.state.select(page);
        if changed {
            tracing::debug!(page, total = self.state.total_pages(), "page switched");
        }
        changed
    }
}

// ============================================================================
// RemotePager
// ============================================================================

/// What the remote pager currently shows in place of its item window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteBody {
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

/// Paging state for a list whose pages come from a remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePager {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
    body: RemoteBody,
}

impl RemotePager {
    /// A pager on page 1 waiting for its first response.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size: page_size.max(1),
            body: RemoteBody::Loading,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[cfg(test)]
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn body(&self) -> &RemoteBody {
        &self.body
    }

    #[must_use]
    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.total_pages)
    }

    /// Whether activating `page` should start a request.
    #[must_use]
    pub fn can_activate(&self, page: usize) -> bool {
        page != self.current_page && (1..=self.total_pages).contains(&page)
    }

    /// Marks `page` as current and shows the loading state. Used both for a
    /// control activation and for reloading the current page.
    pub fn begin(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
        self.body = RemoteBody::Loading;
    }

    /// Applies a successful response for the current page.
    ///
    /// When the reported page count no longer reaches the current page, the
    /// items belong to a page that does not exist anymore. The pager then
    /// moves to the last page, stays in the loading state, and returns that
    /// page so the caller can request it.
    #[must_use]
    pub fn apply_loaded(&mut self, items: Vec<String>, total_pages: usize) -> Option<usize> {
        self.total_pages = total_pages.max(1);
        if self.current_page > self.total_pages {
            self.current_page = self.total_pages;
            self.body = RemoteBody::Loading;
            return Some(self.current_page);
        }
        self.body = RemoteBody::Loaded(items);
        None
    }

    /// Replaces the window with a failure message; the control row is kept.
    pub fn apply_failed(&mut self, message: impl Into<String>) {
        self.body = RemoteBody::Failed(message.into());
    }
}

// ============================================================================
// Tests
// ============================================================================
