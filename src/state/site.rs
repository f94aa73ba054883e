//! Site pages and their named slots.
//!
//! Each site page owns a fixed set of slots, addressed by [`SlotId`]. A slot
//! holds the state of exactly one widget; nothing is shared between slots or
//! between pages. Pages differ in which slots they carry, so a renderer that
//! targets a slot the page lacks simply reports [`RenderOutcome::TargetAbsent`].

use std::fmt;

use crate::domain::{Book, ContactForm};
use crate::widgets::{CategorySection, PagedList, RemotePager};

// ============================================================================
// Slot Identifiers
// ============================================================================

/// Identifiers of every slot any page may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    DailyQuote,
    DailyAffirmation,
    RandomAffirmation,
    AllAffirmations,
    QuotesContainer,
    BookResults,
    ContactForm,
}

impl SlotId {
    /// Stable identifier string, as used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DailyQuote => "daily-quote",
            Self::DailyAffirmation => "daily-affirmation",
            Self::RandomAffirmation => "random-affirmation-display",
            Self::AllAffirmations => "all-affirmations",
            Self::QuotesContainer => "quotes-container",
            Self::BookResults => "book-results",
            Self::ContactForm => "contact-form",
        }
    }

    /// Title shown on the slot's border.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DailyQuote => "Quote of the Day",
            Self::DailyAffirmation => "Affirmation of the Day",
            Self::RandomAffirmation => "Random Affirmation",
            Self::AllAffirmations => "Affirmations",
            Self::QuotesContainer => "Quotes",
            Self::BookResults => "Books",
            Self::ContactForm => "Contact",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Site Sections
// ============================================================================

/// The site's pages, shown as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SiteSection {
    #[default]
    Home,
    Affirmations,
    Quotes,
    Books,
    Contact,
}

impl SiteSection {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Affirmations,
        Self::Quotes,
        Self::Books,
        Self::Contact,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Affirmations => "Affirmations",
            Self::Quotes => "Quotes",
            Self::Books => "Books",
            Self::Contact => "Contact",
        }
    }

    /// Slots present on this page, top to bottom.
    #[must_use]
    pub const fn slots(self) -> &'static [SlotId] {
        match self {
            Self::Home => &[
                SlotId::DailyQuote,
                SlotId::DailyAffirmation,
                SlotId::RandomAffirmation,
            ],
            Self::Affirmations => &[SlotId::DailyAffirmation, SlotId::AllAffirmations],
            Self::Quotes => &[SlotId::DailyQuote, SlotId::QuotesContainer],
            Self::Books => &[SlotId::BookResults],
            Self::Contact => &[SlotId::ContactForm],
        }
    }

    /// The slot that receives cursor and activation keys.
    #[must_use]
    pub const fn primary_slot(self) -> SlotId {
        match self {
            Self::Home => SlotId::RandomAffirmation,
            Self::Affirmations => SlotId::AllAffirmations,
            Self::Quotes => SlotId::QuotesContainer,
            Self::Books => SlotId::BookResults,
            Self::Contact => SlotId::ContactForm,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ============================================================================
// Slot Content
// ============================================================================

/// One category with its own paginator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedCategory {
    pub name: String,
    pub list: PagedList,
}

/// State of the book results slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookResults {
    #[default]
    Idle,
    Searching(String),
    Found(Vec<Book>),
    Message(String),
}

/// Whatever widget currently lives in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotContent {
    /// Nothing rendered yet.
    #[default]
    Empty,
    Text(String),
    Paged(PagedList),
    Remote(RemotePager),
    Categories(Vec<CategorySection>),
    PagedCategories(Vec<PagedCategory>),
    Books(BookResults),
    Contact(ContactForm),
}

impl SlotContent {
    /// Number of cursor positions the content offers.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        match self {
            Self::Categories(sections) => sections.len(),
            Self::PagedCategories(categories) => categories.len(),
            Self::Books(BookResults::Found(books)) => books.len(),
            _ => 0,
        }
    }
}

/// A named slot on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub content: SlotContent,
}

/// Result of a render call. A missing slot is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RenderOutcome {
    Rendered,
    TargetAbsent,
}

impl RenderOutcome {
    #[must_use]
    pub const fn is_rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }
}

// ============================================================================
// Page
// ============================================================================

/// A site page: its slots plus the cursor into its primary slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    section: SiteSection,
    slots: Vec<Slot>,
    cursor: usize,
}

impl Page {
    /// A page with the section's standard slots, all empty.
    #[must_use]
    pub fn new(section: SiteSection) -> Self {
        Self::with_slots(section, section.slots())
    }

    /// A page carrying an explicit slot list.
    #[must_use]
    pub fn with_slots(section: SiteSection, ids: &[SlotId]) -> Self {
        Self {
            section,
            slots: ids
                .iter()
                .map(|&id| Slot {
                    id,
                    content: SlotContent::Empty,
                })
                .collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub const fn section(&self) -> SiteSection {
        self.section
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[cfg(test)]
    #[must_use]
    pub fn has_slot(&self, id: SlotId) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }

    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&SlotContent> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.content)
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut SlotContent> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.content)
    }

    /// Content of the page's primary slot.
    #[must_use]
    pub fn primary(&self) -> Option<&SlotContent> {
        self.slot(self.section.primary_slot())
    }

    pub fn primary_mut(&mut self) -> Option<&mut SlotContent> {
        self.slot_mut(self.section.primary_slot())
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.primary().map_or(0, SlotContent::selectable_count);
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}

// ============================================================================
// Site
// ============================================================================

/// Every page of the site, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pages: Vec<Page>,
}

impl Site {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: SiteSection::ALL.into_iter().map(Page::new).collect(),
        }
    }

    /// A site built from explicit pages, for layouts other than the standard one.
    #[cfg(test)]
    #[must_use]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    #[must_use]
    pub fn page(&self, section: SiteSection) -> Option<&Page> {
        self.pages.iter().find(|p| p.section == section)
    }

    pub fn page_mut(&mut self, section: SiteSection) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.section == section)
    }

    pub fn pages_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.iter_mut()
    }

    /// Runs `render` on every page; returns how many actually had the slot.
    pub fn render_everywhere<F>(&mut self, mut render: F) -> usize
    where
        F: FnMut(&mut Page) -> RenderOutcome,
    {
        self.pages
            .iter_mut()
            .map(&mut render)
            .filter(|outcome| outcome.is_rendered())
            .count()
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
