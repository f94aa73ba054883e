//! Domain types for Positively.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for remote content fetches
//! - [`catalog`] - The immutable affirmation and quote catalog
//! - [`picker`] - Uniform random selection and daily picks
//! - [`quote`] - Quote formatting and remote quote pages
//! - [`book`] - Book search results
//! - [`contact`] - Contact form validation

// ============================================================================
// Module Declarations
// ============================================================================

pub mod book;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod picker;
pub mod quote;

// ============================================================================
// Re-exports
// ============================================================================

pub use book::{Book, BookSearch};
pub use catalog::{Category, ContentCatalog};
pub use contact::{ContactField, ContactForm};
pub use error::ContentError;
pub use picker::{DailyPicks, daily_rng, pick};
pub use quote::{QuotesPage, format_quote};
