//! Expand/collapse sections, one per category.
//!
//! Each section is a strict two-state toggle. Collapsed shows the first
//! [`TEASER_SIZE`] items; expanded shows everything after them at once. There
//! is no incremental paging in between.

use crate::domain::Category;

/// Items shown while a section is collapsed.
pub const TEASER_SIZE: usize = 5;

/// The two reachable view states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

/// The single control a section shows, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleControl {
    ShowMore,
    ShowLess,
}

impl ToggleControl {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowMore => "Show more",
            Self::ShowLess => "Show less",
        }
    }
}

/// What a section currently renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub teaser: String,
    pub items: &'a [String],
    pub control: Option<ToggleControl>,
}

/// A category rendered as a teaser plus a collapsible item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    name: String,
    items: Vec<String>,
    state: ExpandState,
}

impl CategorySection {
    /// Builds a collapsed section. Returns `None` for an empty category,
    /// which has no teaser and is not rendered.
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            items,
            state: ExpandState::Collapsed,
        })
    }

    /// Convenience for building from a catalog category.
    #[must_use]
    pub fn from_category(category: &Category) -> Option<Self> {
        Self::new(category.name.clone(), category.items.clone())
    }

    #[cfg(test)]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    #[must_use]
    pub const fn state(&self) -> ExpandState {
        self.state
    }

    /// `"{name} – “{first item}”"`.
    #[must_use]
    pub fn teaser(&self) -> String {
        format!("{} – “{}”", self.name, self.items[0])
    }

    /// Whether the section has anything beyond the teaser window.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.items.len() > TEASER_SIZE
    }

    #[must_use]
    pub fn visible(&self) -> &[String] {
        let split = self.items.len().min(TEASER_SIZE);
        match self.state {
            ExpandState::Collapsed => &self.items[..split],
            ExpandState::Expanded => &self.items[split..],
        }
    }

    #[must_use]
    pub fn control(&self) -> Option<ToggleControl> {
        if !self.is_expandable() {
            return None;
        }
        Some(match self.state {
            ExpandState::Collapsed => ToggleControl::ShowMore,
            ExpandState::Expanded => ToggleControl::ShowLess,
        })
    }

    /// Activates the section's control. Returns `false` when there is none.
    pub fn activate(&mut self) -> bool {
        let Some(control) = self.control() else {
            return false;
        };
        self.state = match control {
            ToggleControl::ShowMore => ExpandState::Expanded,
            ToggleControl::ShowLess => ExpandState::Collapsed,
        };
        tracing::debug!(category = %self.name, state = ?self.state, "section toggled");
        true
    }

    #[must_use]
    pub fn view(&self) -> SectionView<'_> {
        SectionView {
            teaser: self.teaser(),
            items: self.visible(),
            control: self.control(),
        }
    }
}

/// Builds one section per non-empty category, in catalog order.
#[must_use]
pub fn sections_for(categories: &[Category]) -> Vec<CategorySection> {
    categories
        .iter()
        .filter_map(CategorySection::from_category)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentCatalog;
    use insta::assert_debug_snapshot;
    use rstest::rstest;

    fn section(n: usize) -> CategorySection {
        let items = (1..=n).map(|i| format!("item {i}")).collect();
        CategorySection::new("Confidence", items).unwrap()
    }

    #[test]
    fn test_confidence_scenario() {
        let catalog = ContentCatalog::builtin();
        let confidence = catalog.category("Confidence").unwrap();
        let mut section = CategorySection::from_category(confidence).unwrap();

        let collapsed = section.view();
        assert_eq!(collapsed.items, &confidence.items[..5]);
        assert_eq!(collapsed.control, Some(ToggleControl::ShowMore));
        assert_eq!(
            collapsed.teaser,
            "Confidence – “I believe in myself and my abilities.”"
        );

        assert!(section.activate());
        let expanded = section.view();
        assert_eq!(expanded.items, &confidence.items[5..10]);
        assert_eq!(expanded.control, Some(ToggleControl::ShowLess));

        assert!(section.activate());
        assert_eq!(section.view().items, &confidence.items[..5]);
        assert_eq!(section.view().control, Some(ToggleControl::ShowMore));
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(5)]
    fn test_short_sections_never_show_a_control(#[case] n: usize) {
        let mut section = section(n);
        assert_eq!(section.control(), None);
        assert!(!section.activate());
        assert_eq!(section.visible().len(), n);
        assert_eq!(section.state(), ExpandState::Collapsed);
    }

    #[rstest]
    #[case(6)]
    #[case(11)]
    #[case(30)]
    fn test_round_trip_restores_collapsed_view(#[case] n: usize) {
        let mut section = section(n);
        let before: Vec<String> = section.visible().to_vec();
        let before_control = section.control();

        section.activate();
        assert_eq!(section.visible().len(), n - TEASER_SIZE);
        section.activate();

        assert_eq!(section.visible(), before.as_slice());
        assert_eq!(section.control(), before_control);
    }

    #[test]
    fn test_expanded_view_reveals_everything_past_the_teaser() {
        let mut section = section(12);
        section.activate();
        assert_debug_snapshot!(section.view(), @r#"
        SectionView {
            teaser: "Confidence – “item 1”",
            items: [
                "item 6",
                "item 7",
                "item 8",
                "item 9",
                "item 10",
                "item 11",
                "item 12",
            ],
            control: Some(
                ShowLess,
            ),
        }
        "#);
    }

    #[test]
    fn test_empty_category_is_skipped() {
        assert!(CategorySection::new("Empty", Vec::new()).is_none());

        let categories = vec![
            Category::new("Empty", Vec::<String>::new()),
            Category::new("Calm", ["Breathe."]),
        ];
        let sections = sections_for(&categories);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name(), "Calm");
    }

    #[test]
    fn test_sections_are_independent() {
        let catalog = ContentCatalog::builtin();
        let mut sections = sections_for(catalog.categories());
        sections[1].activate();

        assert_eq!(sections[0].state(), ExpandState::Collapsed);
        assert_eq!(sections[1].state(), ExpandState::Expanded);
        assert_eq!(sections[2].state(), ExpandState::Collapsed);
    }
}
