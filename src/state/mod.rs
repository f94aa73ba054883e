//! State management for the Positively TUI.
//!
//! - [`Site`] - every page and its named slots
//! - [`RequestTracker`] - generations that keep stale responses out of slots
//! - [`UiState`] - active page, popups, toasts
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                           │
//! ├──────────────┬────────────────┬──────────────────────┤
//! │     Site     │ RequestTracker │       UiState        │
//! │  - pages     │  - per-slot    │  - active page       │
//! │  - slots     │    generation  │  - popup / toast     │
//! └──────────────┴────────────────┴──────────────────────┘
//! ```
//!
//! Remote loads run on spawned tasks and report back as [`AppMessage`]s that
//! the main loop drains once per iteration.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::ContentFetcher;
use crate::domain::{BookSearch, ContentCatalog, QuotesPage};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;
mod app_messages;
mod render;

pub mod config;
pub mod requests;
pub mod site;
pub mod ui_state;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AffirmationLayout, AppConfig};
pub use requests::{RequestToken, RequestTracker};
pub use site::{BookResults, Page, PagedCategory, Site, SiteSection, SlotContent, SlotId};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetches to the main app loop.
///
/// Every message carries the token of the load that produced it.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A quotes page finished loading.
    QuotesLoaded {
        token: RequestToken,
        page: usize,
        result: Result<QuotesPage, String>,
    },
    /// A random affirmation arrived (already substituted on failure).
    AffirmationLoaded { token: RequestToken, text: String },
    /// A book search finished.
    BooksLoaded {
        token: RequestToken,
        result: Result<BookSearch, String>,
    },
    /// A batch of quotes for refreshing the daily quote.
    QuoteBatchLoaded {
        token: RequestToken,
        result: Result<Vec<String>, String>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Page to show first.
    pub section: Option<SiteSection>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Every page with its slots.
    pub site: Site,

    /// UI state - active page, popups, toasts.
    pub ui: UiState,

    /// Effective configuration for this session.
    pub config: AppConfig,

    /// Current layout of the affirmations page.
    pub affirmation_layout: AffirmationLayout,

    /// Built-in or configured content, shared with nothing that mutates it.
    pub catalog: Arc<ContentCatalog>,

    /// Whether the application should exit.
    pub exit: bool,

    pub(crate) requests: RequestTracker,

    // NOTE: sends use `let _ = tx.send(...)`; the receiver is gone only at
    // shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    pub(crate) fetcher: ContentFetcher,
}

impl App {
    /// The page currently on screen.
    #[must_use]
    pub fn active_page(&self) -> Option<&Page> {
        self.site.page(self.ui.active)
    }

    pub fn active_page_mut(&mut self) -> Option<&mut Page> {
        self.site.page_mut(self.ui.active)
    }
}
