//! Command pattern for key event handling.
//!
//! Key events are translated into [`AppCommand`]s according to the current
//! [`InputContext`], so keybindings can be tested without an `App`.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::SiteSection;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing a page with no popup open.
    Page(SiteSection),
    /// Book search prompt is open.
    SearchInput,
    /// Viewing a message/notification popup.
    MessagePopup,
}

impl InputContext {
    /// Returns `true` if this context accepts text input.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(
            self,
            Self::SearchInput | Self::Page(SiteSection::Contact)
        )
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    NextSection,
    PrevSection,
    /// Dismiss/close the current popup.
    Dismiss,

    // === Navigation ===
    CursorUp,
    CursorDown,
    /// Toggle the selected section, or open the selected book.
    Activate,

    // === Paging ===
    PrevPage,
    NextPage,
    /// Activate the page control labeled with this number.
    GoToPage(usize),

    // === Page Actions ===
    ToggleLayout,
    FetchAffirmation,
    RefreshDailyQuote,
    ReloadQuotes,
    OpenSearch,

    // === Text Input ===
    /// Move focus to the other contact form field.
    SwitchField,
    TypeChar(char),
    Backspace,
    /// Submit the search prompt or the contact form.
    Submit,

    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command would exit the application.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// # Arguments
    ///
    /// * `key` - The key event to map
    /// * `context` - The current input context
    ///
    /// # Returns
    ///
    /// The appropriate `AppCommand` for the given key and context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if is_ctrl_c(key) {
            return AppCommand::Quit;
        }

        if context.accepts_text_input() {
            return Self::map_text_input_keys(key, context);
        }

        match context {
            InputContext::Page(section) => Self::map_page_keys(key, *section),
            InputContext::SearchInput => Self::map_text_input_keys(key, context),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    /// Keys shared by every non-text page, then the page's own keys.
    fn map_page_keys(key: KeyEvent, section: SiteSection) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => return AppCommand::Quit,
            KeyCode::Tab => return AppCommand::NextSection,
            KeyCode::BackTab => return AppCommand::PrevSection,
            KeyCode::Esc => return AppCommand::Dismiss,
            _ => {}
        }

        match section {
            SiteSection::Home => Self::map_home_keys(key),
            SiteSection::Affirmations => Self::map_affirmations_keys(key),
            SiteSection::Quotes => Self::map_quotes_keys(key),
            SiteSection::Books => Self::map_books_keys(key),
            SiteSection::Contact => {
                Self::map_text_input_keys(key, &InputContext::Page(SiteSection::Contact))
            }
        }
    }

    fn map_home_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('a') => AppCommand::FetchAffirmation,
            KeyCode::Char('n') => AppCommand::RefreshDailyQuote,
            _ => AppCommand::Noop,
        }
    }

    fn map_affirmations_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('v') => AppCommand::ToggleLayout,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Activate,
            _ => Self::map_paging_keys(key),
        }
    }

    fn map_quotes_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('r') => AppCommand::ReloadQuotes,
            KeyCode::Char('n') => AppCommand::RefreshDailyQuote,
            _ => Self::map_paging_keys(key),
        }
    }

    fn map_books_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('/' | 's') => AppCommand::OpenSearch,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::CursorDown,
            KeyCode::Enter | KeyCode::Char('o') => AppCommand::Activate,
            _ => AppCommand::Noop,
        }
    }

    /// Page controls: arrows for neighbors, digits for a labeled page.
    fn map_paging_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => AppCommand::PrevPage,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::NextPage,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map_or(AppCommand::Noop, |d| AppCommand::GoToPage(d as usize)),
            _ => AppCommand::Noop,
        }
    }

    /// Printable keys are text. The contact form also keeps page switching
    /// and moves between its two fields.
    fn map_text_input_keys(key: KeyEvent, context: &InputContext) -> AppCommand {
        let in_form = *context == InputContext::Page(SiteSection::Contact);
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Tab if in_form => AppCommand::NextSection,
            KeyCode::BackTab if in_form => AppCommand::PrevSection,
            KeyCode::Up | KeyCode::Down if in_form => AppCommand::SwitchField,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::TypeChar(c)
            }
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

// ============================================================================
// Tests
// ============================================================================
