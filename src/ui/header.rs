//! Header rendering for Positively TUI
//!
//! Renders the logo, one tab per page and the offline indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Paragraph, Tabs},
};

use crate::state::{App, SiteSection};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::create_border_block;

/// Width reserved for the logo.
const LOGO_WIDTH: u16 = 14;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let logo_area = Rect::new(
        area.x + 2,
        area.y + 1,
        LOGO_WIDTH.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(create_logo()), logo_area);

    let tabs_x = logo_area.right() + 1;
    let tabs_area = Rect::new(
        tabs_x,
        area.y + 1,
        area.right().saturating_sub(tabs_x + 1),
        1,
    );
    frame.render_widget(create_tabs(app.ui.active), tabs_area);

    if app.config.offline && area.width > 60 {
        let indicator = Paragraph::new("offline")
            .style(Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right);
        let indicator_area = Rect::new(area.right() - 10, area.y + 1, 8, 1);
        frame.render_widget(indicator, indicator_area);
    }
}

fn create_logo() -> Line<'static> {
    Line::from(vec!["✦ ".yellow(), "Positively".light_magenta().bold()])
}

fn create_tabs(active: SiteSection) -> Tabs<'static> {
    Tabs::new(SiteSection::ALL.iter().map(|section| section.title()))
        .select(active.index())
        .style(Style::default().fg(MUTED_COLOR))
        .highlight_style(
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
}

// ============================================================================
// Tests
// ============================================================================
