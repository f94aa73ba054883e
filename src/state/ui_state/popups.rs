//! Popup state types.

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Message/notification popup.
    Message(String),
    /// Book search prompt with the query typed so far.
    BookSearch(String),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the query if the book search prompt is open.
    #[must_use]
    pub fn as_search(&self) -> Option<&str> {
        match self {
            Self::BookSearch(query) => Some(query.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_state_variants() {
        assert!(!PopupState::None.is_active());
        assert!(PopupState::Message("hi".into()).is_active());
        assert!(PopupState::BookSearch(String::new()).is_active());

        assert_eq!(PopupState::BookSearch("zen".into()).as_search(), Some("zen"));
        assert_eq!(PopupState::Message("zen".into()).as_search(), None);
    }
}
