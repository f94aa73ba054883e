//! Layout calculations for the Positively TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, TEXT_SLOT_HEIGHT};
use crate::state::{Page, SlotContent};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (logo, page tabs)
    pub header: Rect,
    /// The active page's slots
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Splits `area` into one rect per slot of `page`, top to bottom.
///
/// Text slots get a fixed height; everything else shares the rest.
#[must_use]
pub fn slot_areas(page: &Page, area: Rect) -> Vec<Rect> {
    let constraints: Vec<Constraint> = page
        .slots()
        .iter()
        .map(|slot| match slot.content {
            SlotContent::Text(_) | SlotContent::Empty => Constraint::Length(TEXT_SLOT_HEIGHT),
            _ => Constraint::Min(5),
        })
        .collect();

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Calculate a centered popup area with fixed dimensions.
///
/// # Arguments
///
/// * `parent` - Parent area
/// * `width` - Desired popup width
/// * `height` - Desired popup height
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
