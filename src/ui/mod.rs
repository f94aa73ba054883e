//! UI rendering module for the Positively TUI.
//!
//! # Module Structure
//!
//! - `slots` - Content slots of the active page
//! - `popups` - Modal dialogs (book search, messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Logo and page tabs
//! - `footer` - Keybinding hints
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod slots;

use ratatui::Frame;

use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws the header, the active page and the footer, then any popup on top,
/// then the toast overlay.
///
/// # Arguments
///
/// * `app` - The application state containing all data to render
/// * `frame` - The ratatui frame to render to
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let app_layout = layout::calculate_app_layout(size);

    header::render(frame, app_layout.header, app);
    if let Some(page) = app.active_page() {
        slots::render_page(frame, app_layout.main, page, app.affirmation_layout);
    }
    footer::render(frame, app_layout.footer, app);

    match &app.ui.popup_state {
        PopupState::Message(message) => popups::message::render(frame, size, message),
        PopupState::BookSearch(query) => popups::search::render(frame, size, query),
        PopupState::None => {}
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
