//! Message popup rendering.
//!
//! A generic popup for informational messages and errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders a message popup sized to its text.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render to
/// * `area` - The terminal area to render within
/// * `message` - The message text to display (supports multi-line)
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let (popup_width, popup_height) = popup_size(area, message);
    let popup_area = centered_popup_area(area, popup_width, popup_height);
    if popup_area.height < 3 || popup_area.width < 3 {
        return;
    }

    let popup_block = create_popup_block("Message");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height.saturating_sub(2),
    );

    let prompt = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, message_area);

    if inner_area.height < 3 {
        return;
    }

    let separator = "─".repeat(usize::from(inner_area.width));
    let separator_area = Rect::new(inner_area.x, inner_area.bottom() - 2, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(inner_area.x, inner_area.bottom() - 1, inner_area.width, 1);
    let help_msg = Paragraph::new("Esc:Close  Enter:Close")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help_msg, help_area);
}

/// Width and height for `message`, before clamping to the parent area.
fn popup_size(area: Rect, message: &str) -> (u16, u16) {
    let message_lines = u16::try_from(message.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let width = 40.max(longest_line.saturating_add(6)).min(area.width * 8 / 10);
    let height = 6.max(message_lines.saturating_add(4));
    (width, height)
}

// ============================================================================
// Tests
// ============================================================================
