//! Content slot rendering.
//!
//! Each slot of the active page is drawn as a bordered block titled after the
//! slot. The line builders are kept free of `Frame` so they can be tested on
//! their own.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::create_border_block;
use super::layout::slot_areas;
use crate::constants::{BOOKS_PROMPT, QUOTES_LOADING_MESSAGE};
use crate::domain::contact::SUCCESS_MESSAGE;
use crate::domain::{ContactField, ContactForm};
use crate::state::{AffirmationLayout, BookResults, Page, PagedCategory, SlotContent};
use crate::theme::{
    ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, QUOTE_STYLE, SECONDARY_COLOR, SELECTED_STYLE,
    SUCCESS_COLOR,
};
use crate::widgets::{CategorySection, PagedList, RemoteBody, RemotePager, controls_line};

/// Marker drawn in front of the entry under the cursor.
const CURSOR_MARKER: &str = "▶ ";
const NO_MARKER: &str = "  ";

/// Lines for a slot plus the line index the view should keep visible.
#[derive(Debug, Default)]
pub struct SlotLines {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

impl From<Vec<Line<'static>>> for SlotLines {
    fn from(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            focus_line: None,
        }
    }
}

// ============================================================================
// Page Rendering
// ============================================================================

/// Renders every slot of `page` into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, page: &Page, layout: AffirmationLayout) {
    let primary = page.section().primary_slot();
    let areas = slot_areas(page, area);

    for (slot, slot_area) in page.slots().iter().zip(areas) {
        let focused = slot.id == primary;
        let block = create_border_block(slot.id.title(), focused);
        let inner = block.inner(slot_area);
        frame.render_widget(block, slot_area);

        let cursor = focused.then(|| page.cursor());
        let SlotLines { lines, focus_line } = slot_lines(&slot.content, cursor, layout);
        let scroll = scroll_offset(focus_line, inner.height);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, inner);
    }
}

/// Vertical scroll that keeps `focus_line` inside a view of `height` rows.
#[must_use]
pub fn scroll_offset(focus_line: Option<usize>, height: u16) -> u16 {
    let Some(line) = focus_line else {
        return 0;
    };
    let height = usize::from(height.max(1));
    let offset = (line + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Builds the lines for one slot. `cursor` is set only for the focused slot.
#[must_use]
pub fn slot_lines(
    content: &SlotContent,
    cursor: Option<usize>,
    layout: AffirmationLayout,
) -> SlotLines {
    let lines: SlotLines = match content {
        SlotContent::Empty => SlotLines::default(),
        SlotContent::Text(text) => text_lines(text).into(),
        SlotContent::Paged(list) => paged_lines(list).into(),
        SlotContent::Remote(pager) => remote_lines(pager).into(),
        SlotContent::Categories(sections) => category_lines(sections, cursor),
        SlotContent::PagedCategories(categories) => paged_category_lines(categories, cursor),
        SlotContent::Books(results) => book_lines(results, cursor),
        SlotContent::Contact(form) => contact_lines(form).into(),
    };
    lines.with_layout_hint(content, layout)
}

impl SlotLines {
    /// Appends the layout hint under affirmation lists.
    fn with_layout_hint(mut self, content: &SlotContent, layout: AffirmationLayout) -> Self {
        if matches!(
            content,
            SlotContent::Categories(_) | SlotContent::PagedCategories(_)
        ) {
            self.lines.push(Line::default());
            self.lines.push(Line::styled(
                format!("Layout: {}  (v to switch)", layout.label()),
                Style::default().fg(MUTED_COLOR),
            ));
        }
        self
    }
}

// ============================================================================
// Line Builders
// ============================================================================

#[must_use]
pub fn text_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::styled(line.to_string(), QUOTE_STYLE))
        .collect()
}

fn item_line(item: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(PRIMARY_COLOR)),
        Span::raw(item.to_string()),
    ])
}

#[must_use]
pub fn paged_lines(list: &PagedList) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = list.visible().iter().map(|item| item_line(item)).collect();
    lines.push(Line::default());
    lines.push(controls_line(&list.controls()));
    lines
}

#[must_use]
pub fn remote_lines(pager: &RemotePager) -> Vec<Line<'static>> {
    let mut lines = match pager.body() {
        RemoteBody::Loading => vec![Line::styled(
            QUOTES_LOADING_MESSAGE,
            Style::default().fg(MUTED_COLOR),
        )],
        RemoteBody::Loaded(items) => items.iter().map(|item| item_line(item)).collect(),
        RemoteBody::Failed(message) => vec![Line::styled(
            message.clone(),
            Style::default().fg(ERROR_COLOR),
        )],
    };
    lines.push(Line::default());
    lines.push(controls_line(&pager.controls()));
    lines
}

fn heading_line(text: String, selected: bool) -> Line<'static> {
    let marker = if selected { CURSOR_MARKER } else { NO_MARKER };
    let style = if selected {
        SELECTED_STYLE.fg(SECONDARY_COLOR)
    } else {
        Style::default()
            .fg(SECONDARY_COLOR)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(PRIMARY_COLOR)),
        Span::styled(text, style),
    ])
}

#[must_use]
pub fn category_lines(sections: &[CategorySection], cursor: Option<usize>) -> SlotLines {
    let mut out = SlotLines::default();

    for (index, section) in sections.iter().enumerate() {
        let view = section.view();
        let selected = cursor == Some(index);
        if selected {
            out.focus_line = Some(out.lines.len());
        }
        out.lines.push(heading_line(view.teaser, selected));
        out.lines
            .extend(view.items.iter().map(|item| item_line(item)));
        if let Some(control) = view.control {
            out.lines.push(Line::styled(
                format!("  [{}]", control.label()),
                Style::default().fg(PRIMARY_COLOR),
            ));
        }
        out.lines.push(Line::default());
    }
    out
}

#[must_use]
pub fn paged_category_lines(categories: &[PagedCategory], cursor: Option<usize>) -> SlotLines {
    let mut out = SlotLines::default();

    for (index, category) in categories.iter().enumerate() {
        let selected = cursor == Some(index);
        if selected {
            out.focus_line = Some(out.lines.len());
        }
        out.lines.push(heading_line(category.name.clone(), selected));
        out.lines.extend(paged_lines(&category.list));
        out.lines.push(Line::default());
    }
    out
}

#[must_use]
pub fn book_lines(results: &BookResults, cursor: Option<usize>) -> SlotLines {
    let muted = Style::default().fg(MUTED_COLOR);
    match results {
        BookResults::Idle => vec![Line::styled(BOOKS_PROMPT, muted)].into(),
        BookResults::Searching(message) | BookResults::Message(message) => {
            vec![Line::styled(message.clone(), muted)].into()
        }
        BookResults::Found(books) => {
            let mut out = SlotLines::default();
            for (index, book) in books.iter().enumerate() {
                let selected = cursor == Some(index);
                if selected {
                    out.focus_line = Some(out.lines.len());
                }
                out.lines.push(heading_line(book.title.clone(), selected));
                if let Some(byline) = book.byline() {
                    out.lines
                        .push(Line::styled(format!("  {byline}"), QUOTE_STYLE));
                }
                if let Some(description) = &book.description {
                    out.lines.push(Line::raw(format!("  {description}")));
                }
                out.lines
                    .push(Line::styled(format!("  {}", book.link), muted));
                out.lines.push(Line::default());
            }
            out
        }
    }
}

#[must_use]
pub fn contact_lines(form: &ContactForm) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for field in [ContactField::Name, ContactField::Message] {
        let state = form.field(field);
        let active = form.active == field;

        let label_style = if state.invalid {
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
        } else if active {
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_COLOR)
        };
        let caret = if active { "▏" } else { "" };

        lines.push(Line::styled(format!("{}:", field.label()), label_style));
        lines.push(Line::raw(format!("  {}{caret}", state.value)));
        if let Some(error) = state.error {
            lines.push(Line::styled(
                format!("  {error}"),
                Style::default().fg(ERROR_COLOR),
            ));
        }
        lines.push(Line::default());
    }

    if form.success_visible {
        lines.push(Line::styled(
            SUCCESS_MESSAGE,
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Book;
    use crate::domain::contact::NAME_ERROR;
    use crate::ui::test_support::{draw_app, offline_app};
    use crate::state::SiteSection;
    use crate::widgets::expand::TEASER_SIZE;
    use rstest::rstest;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("item {i}")).collect()
    }

    #[rstest]
    #[case(None, 5, 0)]
    #[case(Some(2), 5, 0)]
    #[case(Some(4), 5, 0)]
    #[case(Some(5), 5, 1)]
    #[case(Some(20), 5, 16)]
    #[case(Some(3), 0, 3)]
    fn test_scroll_offset(#[case] focus: Option<usize>, #[case] height: u16, #[case] expected: u16) {
        assert_eq!(scroll_offset(focus, height), expected);
    }

    #[test]
    fn test_paged_lines_show_window_and_controls() {
        let mut list = PagedList::new(numbered(7), 3);
        list.activate(2);

        let lines = texts(&paged_lines(&list));
        assert_eq!(lines[..3], ["• item 4", "• item 5", "• item 6"]);
        assert_eq!(lines.last().unwrap(), " 1 [2] 3 ");
    }

    #[test]
    fn test_remote_lines_per_body() {
        let mut pager = RemotePager::new(5);
        assert_eq!(texts(&remote_lines(&pager))[0], "Loading quotes...");

        assert_eq!(pager.apply_loaded(vec!["“Hi” - Someone".into()], 2), None);
        let lines = texts(&remote_lines(&pager));
        assert_eq!(lines[0], "• “Hi” - Someone");
        assert_eq!(lines.last().unwrap(), "[1] 2 ");

        pager.apply_failed("nope");
        let lines = remote_lines(&pager);
        assert_eq!(line_text(&lines[0]), "nope");
        assert_eq!(lines[0].style.fg, Some(ERROR_COLOR));
    }

    #[test]
    fn test_category_lines_mark_cursor_and_control() {
        let mut sections = vec![
            CategorySection::new("Calm", numbered(TEASER_SIZE + 2)).unwrap(),
            CategorySection::new("Joy", vec!["smile".into()]).unwrap(),
        ];

        let out = category_lines(&sections, Some(1));
        let lines = texts(&out.lines);
        assert_eq!(lines[0], "  Calm – “item 1”");
        assert!(lines.contains(&"  [Show more]".to_string()));
        let focus = out.focus_line.unwrap();
        assert_eq!(lines[focus], "▶ Joy – “smile”");

        sections[0].activate();
        let lines = texts(&category_lines(&sections, None).lines);
        assert_eq!(lines[1], "• item 6");
        assert!(lines.contains(&"  [Show less]".to_string()));
    }

    #[test]
    fn test_paged_category_lines() {
        let categories = vec![PagedCategory {
            name: "Calm".into(),
            list: PagedList::new(numbered(4), 3),
        }];
        let out = paged_category_lines(&categories, Some(0));
        let lines = texts(&out.lines);
        assert_eq!(lines[0], "▶ Calm");
        assert_eq!(lines[5], "[1] 2 ");
        assert_eq!(out.focus_line, Some(0));
    }

    #[test]
    fn test_book_lines() {
        let idle = texts(&book_lines(&BookResults::Idle, None).lines);
        assert_eq!(idle, [BOOKS_PROMPT]);

        let searching = BookResults::Searching("Searching...".into());
        assert_eq!(texts(&book_lines(&searching, None).lines), ["Searching..."]);

        let books = BookResults::Found(vec![
            Book {
                title: "Dune".into(),
                authors: Some(vec!["Frank Herbert".into()]),
                description: Some("Spice.".into()),
                link: "https://books.example/dune".into(),
            },
            Book {
                title: "Untitled".into(),
                authors: None,
                description: None,
                link: "#".into(),
            },
        ]);
        let out = book_lines(&books, Some(1));
        let lines = texts(&out.lines);
        assert_eq!(lines[0], "  Dune");
        assert!(lines[1].contains("Frank Herbert"));
        assert_eq!(lines[2], "  Spice.");
        assert_eq!(lines[3], "  https://books.example/dune");
        assert_eq!(lines[out.focus_line.unwrap()], "▶ Untitled");
    }

    #[test]
    fn test_contact_lines_show_errors_and_success() {
        let mut form = ContactForm::new();
        let _ = form.submit();
        let lines = texts(&contact_lines(&form));
        assert!(lines.contains(&format!("  {NAME_ERROR}")));
        assert_eq!(lines[1], "  ▏");
        assert!(!lines.contains(&SUCCESS_MESSAGE.to_string()));

        form.push_char('A');
        form.focus_other();
        form.push_char('B');
        let _ = form.submit();
        let lines = texts(&contact_lines(&form));
        assert_eq!(lines.last().unwrap(), SUCCESS_MESSAGE);
        assert!(!lines.contains(&format!("  {NAME_ERROR}")));
    }

    #[test]
    fn test_affirmation_layout_hint() {
        let sections = vec![CategorySection::new("Calm", vec!["a".into()]).unwrap()];
        let content = SlotContent::Categories(sections);
        let out = slot_lines(&content, None, AffirmationLayout::Expandable);
        let last = line_text(out.lines.last().unwrap());
        assert!(last.starts_with("Layout: "));

        let out = slot_lines(&SlotContent::Text("hi".into()), None, AffirmationLayout::Paged);
        assert_eq!(texts(&out.lines), ["hi"]);
    }

    #[test]
    fn test_quotes_page_renders_local_pager() {
        let app = offline_app(SiteSection::Quotes);
        let screen = draw_app(&app, 100, 40);
        assert!(screen.contains("[1]"), "got:\n{screen}");
        assert!(screen.contains("•"));
    }
}
