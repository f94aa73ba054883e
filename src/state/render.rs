//! Renderers that fill a page slot.
//!
//! Every renderer looks its target slot up by id and touches nothing else on
//! the page. When the page has no such slot the call is a silent no-op that
//! reports [`RenderOutcome::TargetAbsent`].

use crate::domain::{ContactForm, ContentCatalog};
use crate::widgets::{PagedList, RemotePager, sections_for};

use super::site::{BookResults, Page, PagedCategory, RenderOutcome, SlotContent, SlotId};

impl Page {
    /// Replaces a slot's content.
    fn fill(&mut self, id: SlotId, content: SlotContent) -> RenderOutcome {
        let section = self.section();
        let Some(slot) = self.slot_mut(id) else {
            tracing::trace!(slot = %id, ?section, "slot absent, render skipped");
            return RenderOutcome::TargetAbsent;
        };
        *slot = content;
        tracing::debug!(slot = %id, ?section, "slot rendered");
        RenderOutcome::Rendered
    }

    pub fn render_text(&mut self, id: SlotId, text: impl Into<String>) -> RenderOutcome {
        self.fill(id, SlotContent::Text(text.into()))
    }

    /// Renders `items` as a paged list starting on page 1.
    pub fn render_paged_list(
        &mut self,
        id: SlotId,
        items: Vec<String>,
        items_per_page: usize,
    ) -> RenderOutcome {
        self.fill(id, SlotContent::Paged(PagedList::new(items, items_per_page)))
    }

    /// Renders a server-paged list in its loading state on page 1.
    pub fn render_remote_pager(&mut self, id: SlotId, page_size: usize) -> RenderOutcome {
        self.fill(id, SlotContent::Remote(RemotePager::new(page_size)))
    }

    /// Renders one collapsed teaser section per non-empty category.
    pub fn render_category_content(
        &mut self,
        id: SlotId,
        catalog: &ContentCatalog,
    ) -> RenderOutcome {
        let outcome = self.fill(id, SlotContent::Categories(sections_for(catalog.categories())));
        if outcome.is_rendered() && self.section().primary_slot() == id {
            self.reset_cursor();
        }
        outcome
    }

    /// Renders every non-empty category with its own paginator.
    pub fn render_category_pagination(
        &mut self,
        id: SlotId,
        catalog: &ContentCatalog,
        items_per_page: usize,
    ) -> RenderOutcome {
        let categories = catalog
            .categories()
            .iter()
            .filter(|c| !c.items.is_empty())
            .map(|c| PagedCategory {
                name: c.name.clone(),
                list: PagedList::new(c.items.clone(), items_per_page),
            })
            .collect();
        let outcome = self.fill(id, SlotContent::PagedCategories(categories));
        if outcome.is_rendered() && self.section().primary_slot() == id {
            self.reset_cursor();
        }
        outcome
    }

    pub fn render_book_results(&mut self, id: SlotId, results: BookResults) -> RenderOutcome {
        let outcome = self.fill(id, SlotContent::Books(results));
        if outcome.is_rendered() && self.section().primary_slot() == id {
            self.reset_cursor();
        }
        outcome
    }

    /// Renders a fresh, empty contact form.
    pub fn render_contact_form(&mut self, id: SlotId) -> RenderOutcome {
        self.fill(id, SlotContent::Contact(ContactForm::new()))
    }
}

// ============================================================================
// Tests
// ============================================================================
