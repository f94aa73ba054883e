//! Windowing widgets for the content lists.
//!
//! - [`paged`]: numbered-page windows over local or remote sequences
//! - [`expand`]: two-state teaser/full sections, one per category

pub mod expand;
pub mod paged;

pub use expand::{CategorySection, sections_for};
pub use paged::{DEFAULT_ITEMS_PER_PAGE, PagedList, RemoteBody, RemotePager, controls_line};
