//! Popup UI components for the Positively TUI.
//!
//! Popups are modal overlays drawn over the active page; while one is open it
//! receives all input.

pub mod message;
pub mod search;
