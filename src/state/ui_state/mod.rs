//! UI state: the active page, the popup, and the toast overlay.

mod popups;

pub use popups::PopupState;

use super::site::SiteSection;

// ============================================================================
// UI State
// ============================================================================

/// Presentation state that is not owned by any page slot.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new(SiteSection::Home);
/// ui.next_section();
/// ui.show_toast("Layout: paged", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Page currently on screen.
    pub active: SiteSection,
    /// Current popup/modal state.
    pub popup_state: PopupState,
    /// Toast notification message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new(active: SiteSection) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub fn next_section(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_section(&mut self) {
        self.active = self.active.prev();
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn open_book_search(&mut self) {
        self.popup_state = PopupState::BookSearch(String::new());
    }

    pub fn search_type_char(&mut self, c: char) {
        if let PopupState::BookSearch(query) = &mut self.popup_state {
            query.push(c);
        }
    }

    pub fn search_backspace(&mut self) {
        if let PopupState::BookSearch(query) = &mut self.popup_state {
            query.pop();
        }
    }

    /// Closes the search prompt and returns its trimmed query.
    ///
    /// A blank query leaves the prompt open and returns `None`.
    pub fn take_search_query(&mut self) -> Option<String> {
        let query = self.popup_state.as_search()?.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.popup_state = PopupState::None;
        Some(query)
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification that disappears after `ticks` ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
