//! Book search popup.
//!
//! A single text input; the query is sent on Enter.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{FOCUSED_BORDER_STYLE, MUTED_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 8;

/// Renders the book search prompt with the current query.
pub fn render(frame: &mut Frame, area: Rect, query: &str) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    if popup_area.height < POPUP_HEIGHT || popup_area.width < 10 {
        return;
    }

    let popup_block = create_popup_block("Search Books");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
        .title(" Title, author or topic ")
        .title_alignment(Alignment::Left);

    let input_area = Rect::new(inner_area.x + 1, inner_area.y + 1, inner_area.width - 2, 3);
    frame.render_widget(input_block.clone(), input_area);

    let input = Paragraph::new(format!("{query}▏"));
    frame.render_widget(input, input_block.inner(input_area));

    let help_area = Rect::new(inner_area.x, inner_area.bottom() - 1, inner_area.width, 1);
    let help = Paragraph::new("Enter:Search  Esc:Cancel")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}
