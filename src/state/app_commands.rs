//! Command execution and input handling.
//!
//! Keys are mapped to commands by [`KeyMapper`]; this module applies those
//! commands to the active page.

use crossterm::event::KeyEvent;

use super::{AffirmationLayout, App, PopupState, SiteSection, SlotContent};
use crate::commands::{AppCommand, InputContext, KeyMapper};

/// Which page control a paging command activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageTarget {
    Prev,
    Next,
    Number(usize),
}

impl PageTarget {
    const fn resolve(self, current: usize) -> usize {
        match self {
            Self::Prev => current.saturating_sub(1),
            Self::Next => current + 1,
            Self::Number(page) => page,
        }
    }
}

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        if command.is_exit() {
            tracing::debug!(?context, "quit requested");
        }
        self.execute_command(command);
    }

    /// Determines the current input context. Popups take precedence.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::BookSearch(_) => InputContext::SearchInput,
            PopupState::None => InputContext::Page(self.ui.active),
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::NextSection => {
                self.ui.next_section();
            }
            AppCommand::PrevSection => {
                self.ui.prev_section();
            }
            AppCommand::Dismiss => {
                if self.ui.has_active_popup() {
                    tracing::debug!("popup dismissed");
                    self.ui.dismiss_popup();
                }
            }

            // === Navigation ===
            AppCommand::CursorUp => {
                if let Some(page) = self.active_page_mut() {
                    page.cursor_up();
                }
            }
            AppCommand::CursorDown => {
                if let Some(page) = self.active_page_mut() {
                    page.cursor_down();
                }
            }
            AppCommand::Activate => self.activate_selection(),

            // === Paging ===
            AppCommand::PrevPage => self.activate_page_control(PageTarget::Prev),
            AppCommand::NextPage => self.activate_page_control(PageTarget::Next),
            AppCommand::GoToPage(page) => self.activate_page_control(PageTarget::Number(page)),

            // === Page Actions ===
            AppCommand::ToggleLayout => self.toggle_affirmation_layout(),
            AppCommand::FetchAffirmation => self.fetch_random_affirmation(),
            AppCommand::RefreshDailyQuote => self.refresh_daily_quote(),
            AppCommand::ReloadQuotes => self.reload_quotes(),
            AppCommand::OpenSearch => self.ui.open_book_search(),

            // === Text Input ===
            AppCommand::SwitchField => {
                if let Some(form) = self.contact_form_mut() {
                    form.focus_other();
                }
            }
            AppCommand::TypeChar(c) => {
                if self.ui.popup_state.as_search().is_some() {
                    self.ui.search_type_char(c);
                } else if let Some(form) = self.contact_form_mut() {
                    form.push_char(c);
                }
            }
            AppCommand::Backspace => {
                if self.ui.popup_state.as_search().is_some() {
                    self.ui.search_backspace();
                } else if let Some(form) = self.contact_form_mut() {
                    form.backspace();
                }
            }
            AppCommand::Submit => self.submit(),

            AppCommand::Noop => {}
        }
    }

    fn contact_form_mut(&mut self) -> Option<&mut crate::domain::ContactForm> {
        if self.ui.active != SiteSection::Contact {
            return None;
        }
        match self.active_page_mut()?.primary_mut()? {
            SlotContent::Contact(form) => Some(form),
            _ => None,
        }
    }

    fn submit(&mut self) {
        if self.ui.popup_state.as_search().is_some() {
            if let Some(query) = self.ui.take_search_query() {
                self.search_books(query);
            }
            return;
        }
        if let Some(form) = self.contact_form_mut() {
            let _ = form.submit();
        }
    }

    /// Enter/Space on the selected item of the active page.
    fn activate_selection(&mut self) {
        match self.ui.active {
            SiteSection::Books => self.open_selected_book(),
            SiteSection::Affirmations if self.affirmation_layout == AffirmationLayout::Expandable => {
                let Some(page) = self.active_page_mut() else {
                    return;
                };
                let cursor = page.cursor();
                if let Some(SlotContent::Categories(sections)) = page.primary_mut()
                    && let Some(section) = sections.get_mut(cursor)
                {
                    section.activate();
                }
            }
            _ => {}
        }
    }

    /// Activates a page control on the active page's paginated slot.
    ///
    /// Local lists switch page at once; the remote quotes list starts a load
    /// for the target page. Disabled or out-of-range targets do nothing.
    fn activate_page_control(&mut self, target: PageTarget) {
        let Some(page) = self.active_page_mut() else {
            return;
        };
        let cursor = page.cursor();

        let remote_target = match page.primary_mut() {
            Some(SlotContent::Paged(list)) => {
                let page_number = target.resolve(list.state().current_page());
                list.activate(page_number);
                None
            }
            Some(SlotContent::PagedCategories(categories)) => {
                if let Some(category) = categories.get_mut(cursor) {
                    let page_number = target.resolve(category.list.state().current_page());
                    category.list.activate(page_number);
                }
                None
            }
            Some(SlotContent::Remote(pager)) => {
                let page_number = target.resolve(pager.current_page());
                pager.can_activate(page_number).then_some(page_number)
            }
            _ => None,
        };

        if let Some(page_number) = remote_target {
            self.load_quotes_page(page_number);
        }
    }
}
