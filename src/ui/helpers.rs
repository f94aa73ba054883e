//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// # Arguments
///
/// * `title` - The title text to display in the block border
/// * `focused` - Whether the block should be styled as focused/active
///
/// # Returns
///
/// A configured `Block` widget with appropriate styling.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = if title.is_empty() {
        String::new()
    } else if focused {
        format!(" ● {title} ")
    } else {
        format!(" {title} ")
    };

    let (border_style, border_set, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_focused_block_marks_title() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(create_border_block("Quotes", true), frame.area()))
            .unwrap();

        let top: String = (0..20)
            .map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.starts_with("╔ ● Quotes "), "got {top:?}");
    }

    #[test]
    fn test_unfocused_and_popup_blocks() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let top = ratatui::layout::Rect::new(0, 0, 20, 3);
                let bottom = ratatui::layout::Rect::new(0, 3, 20, 3);
                frame.render_widget(create_border_block("Books", false), top);
                frame.render_widget(create_popup_block("Search"), bottom);
            })
            .unwrap();

        let row = |y: u16| -> String {
            (0..20)
                .map(|x| terminal.backend().buffer()[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).starts_with("╭ Books "));
        assert!(row(3).contains(" Search "));
        assert!(row(3).starts_with('╭'));
    }
}
