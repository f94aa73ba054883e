//! Theme and styling constants for the Positively TUI.
//!
//! Warm colors for the content, muted gray for chrome.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements, the active page control.
pub const PRIMARY_COLOR: Color = Color::Yellow;

/// Secondary accent color - category names and book titles.
pub const SECONDARY_COLOR: Color = Color::LightMagenta;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the item under the cursor.
pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for quoted content text.
pub const QUOTE_STYLE: Style = Style::new().add_modifier(Modifier::ITALIC);
