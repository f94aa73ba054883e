//! Footer rendering module for the Positively TUI.
//!
//! Shows the keyboard shortcuts that apply to the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::{App, SiteSection};
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(&app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Keybinding hints for `context`.
#[must_use]
pub fn hints(context: &InputContext) -> &'static str {
    match context {
        InputContext::MessagePopup => "Esc:Close  Enter:Close  q:Quit",
        InputContext::SearchInput => "Enter:Search  Esc:Cancel",
        InputContext::Page(section) => match section {
            SiteSection::Home => "q:Quit  Tab:Next page  a:Affirmation  n:New quote",
            SiteSection::Affirmations => {
                "q:Quit  Tab:Next page  ↑↓:Select  Enter:Toggle  ←→/1-9:Page  v:Layout"
            }
            SiteSection::Quotes => "q:Quit  Tab:Next page  ←→/1-9:Page  r:Reload  n:New quote",
            SiteSection::Books => "q:Quit  Tab:Next page  /:Search  ↑↓:Select  Enter:Open",
            SiteSection::Contact => "Ctrl+C:Quit  Tab:Next page  ↑↓:Field  Enter:Send",
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_to_string, offline_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rstest::rstest;

    #[rstest]
    #[case(SiteSection::Home, "a:Affirmation")]
    #[case(SiteSection::Affirmations, "v:Layout")]
    #[case(SiteSection::Quotes, "r:Reload")]
    #[case(SiteSection::Books, "/:Search")]
    #[case(SiteSection::Contact, "Enter:Send")]
    fn test_footer_hints_follow_section(#[case] section: SiteSection, #[case] expected: &str) {
        let app = offline_app(section);
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(
            content.contains(expected),
            "Footer should contain '{expected}', got: {content}"
        );
    }

    #[test]
    fn test_quotes_hints() {
        insta::assert_snapshot!(
            hints(&InputContext::Page(SiteSection::Quotes)),
            @"q:Quit  Tab:Next page  ←→/1-9:Page  r:Reload  n:New quote"
        );
    }

    #[test]
    fn test_popup_hints_take_precedence() {
        let mut app = offline_app(SiteSection::Books);
        app.ui.open_book_search();
        assert_eq!(hints(&app.get_input_context()), "Enter:Search  Esc:Cancel");

        app.ui.show_message("hello");
        assert!(hints(&app.get_input_context()).starts_with("Esc:Close"));
    }

    #[test]
    fn test_footer_rendering_robustness() {
        let app = offline_app(SiteSection::Home);

        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();
    }
}
