//! Tests for the state module.

use std::sync::Arc;

use super::{
    AffirmationLayout, App, AppConfig, AppMessage, BookResults, Page, PopupState, Site,
    SiteSection, SlotContent, SlotId, StartupOptions,
};
use crate::commands::{AppCommand, InputContext};
use crate::constants::{
    AFFIRMATION_PROMPT, BOOKS_FAILED, BOOKS_NONE, BOOKS_OFFLINE, QUOTES_FAILED,
};
use crate::domain::contact::{MESSAGE_ERROR, SUCCESS_MESSAGE};
use crate::domain::{Book, BookSearch, ContactField, ContentCatalog, QuotesPage};
use crate::widgets::RemoteBody;
use crate::widgets::expand::ExpandState;

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App; no request is sent until a load is triggered.
fn create_test_app(config: AppConfig) -> App {
    App::new(
        config,
        Arc::new(ContentCatalog::builtin()),
        StartupOptions::default(),
    )
    .expect("test app should build")
}

fn offline_config() -> AppConfig {
    AppConfig {
        offline: true,
        ..AppConfig::default()
    }
}

/// Online config pointing at a closed local port.
fn unreachable_config() -> AppConfig {
    AppConfig {
        relay_url: "http://127.0.0.1:9/raw".into(),
        request_timeout_secs: 1,
        ..AppConfig::default()
    }
}

fn slot(app: &App, section: SiteSection, id: SlotId) -> &SlotContent {
    app.site
        .page(section)
        .and_then(|page| page.slot(id))
        .expect("slot should exist")
}

fn text(app: &App, section: SiteSection, id: SlotId) -> &str {
    match slot(app, section, id) {
        SlotContent::Text(text) => text,
        other => panic!("expected text in {id}, got {other:?}"),
    }
}

fn quotes_page(items: &[&str], total_pages: usize) -> QuotesPage {
    QuotesPage {
        items: items.iter().map(|s| (*s).to_string()).collect(),
        total_pages,
    }
}

fn remote_pager(app: &App) -> &crate::widgets::RemotePager {
    match slot(app, SiteSection::Quotes, SlotId::QuotesContainer) {
        SlotContent::Remote(pager) => pager,
        other => panic!("expected remote pager, got {other:?}"),
    }
}

// ========================================================================
// Bootstrap
// ========================================================================

#[test]
fn test_bootstrap_fills_daily_slots_from_catalog() {
    let app = create_test_app(offline_config());

    let quote = text(&app, SiteSection::Home, SlotId::DailyQuote);
    assert!(app.catalog.quotes().iter().any(|q| q == quote));
    assert_eq!(text(&app, SiteSection::Quotes, SlotId::DailyQuote), quote);

    let affirmation = text(&app, SiteSection::Affirmations, SlotId::DailyAffirmation);
    assert!(app.catalog.affirmations().iter().any(|a| a == affirmation));
    assert_eq!(
        text(&app, SiteSection::Home, SlotId::RandomAffirmation),
        AFFIRMATION_PROMPT
    );
}

#[test]
fn test_bootstrap_renders_expandable_affirmations() {
    let app = create_test_app(offline_config());
    let SlotContent::Categories(sections) =
        slot(&app, SiteSection::Affirmations, SlotId::AllAffirmations)
    else {
        panic!("expected categories");
    };
    assert_eq!(sections.len(), 4);
    assert!(sections.iter().all(|s| s.state() == ExpandState::Collapsed));
    assert_eq!(sections[0].visible().len(), 5);
}

#[test]
fn test_bootstrap_respects_paged_layout() {
    let app = create_test_app(AppConfig {
        affirmation_layout: AffirmationLayout::Paged,
        ..offline_config()
    });
    assert!(matches!(
        slot(&app, SiteSection::Affirmations, SlotId::AllAffirmations),
        SlotContent::PagedCategories(categories) if categories.len() == 4
    ));
}

#[test]
fn test_offline_quotes_use_local_pager() {
    let app = create_test_app(offline_config());
    let SlotContent::Paged(list) = slot(&app, SiteSection::Quotes, SlotId::QuotesContainer) else {
        panic!("expected local list");
    };
    assert_eq!(list.items().len(), 20);
    assert_eq!(list.state().total_pages(), 4);
    assert_eq!(list.visible().len(), 5);
}

#[test]
fn test_online_quotes_start_loading() {
    let app = create_test_app(unreachable_config());
    let pager = remote_pager(&app);
    assert_eq!(pager.current_page(), 1);
    assert_eq!(pager.body(), &RemoteBody::Loading);
}

#[test]
fn test_startup_section_is_honored() {
    let app = App::new(
        offline_config(),
        Arc::new(ContentCatalog::builtin()),
        StartupOptions {
            section: Some(SiteSection::Books),
        },
    )
    .unwrap();
    assert_eq!(app.ui.active, SiteSection::Books);
    assert_eq!(app.get_input_context(), InputContext::Page(SiteSection::Books));
}

// ========================================================================
// Message Handling
// ========================================================================

#[test]
fn test_stale_quotes_response_is_discarded() {
    let mut app = create_test_app(unreachable_config());
    let stale = app.requests.begin(SlotId::QuotesContainer);
    let fresh = app.requests.begin(SlotId::QuotesContainer);

    app.handle_message(AppMessage::QuotesLoaded {
        token: fresh,
        page: 1,
        result: Ok(quotes_page(&["fresh – A"], 3)),
    });
    app.handle_message(AppMessage::QuotesLoaded {
        token: stale,
        page: 1,
        result: Ok(quotes_page(&["stale – B"], 9)),
    });

    let pager = remote_pager(&app);
    assert_eq!(pager.body(), &RemoteBody::Loaded(vec!["fresh – A".into()]));
    assert_eq!(pager.total_pages(), 3);
}

#[test]
fn test_quotes_failure_renders_fixed_message() {
    let mut app = create_test_app(unreachable_config());
    let token = app.requests.begin(SlotId::QuotesContainer);
    app.handle_message(AppMessage::QuotesLoaded {
        token,
        page: 1,
        result: Err("connection refused".into()),
    });

    let pager = remote_pager(&app);
    assert_eq!(pager.body(), &RemoteBody::Failed(QUOTES_FAILED.into()));
    assert_eq!(pager.controls().len(), 1);
}

#[test]
fn test_book_results_messages() {
    let mut app = create_test_app(offline_config());

    let token = app.requests.begin(SlotId::BookResults);
    app.handle_message(AppMessage::BooksLoaded {
        token,
        result: Ok(BookSearch::NoResults),
    });
    assert_eq!(
        slot(&app, SiteSection::Books, SlotId::BookResults),
        &SlotContent::Books(BookResults::Message(BOOKS_NONE.into()))
    );

    let token = app.requests.begin(SlotId::BookResults);
    app.handle_message(AppMessage::BooksLoaded {
        token,
        result: Err("timeout".into()),
    });
    assert_eq!(
        slot(&app, SiteSection::Books, SlotId::BookResults),
        &SlotContent::Books(BookResults::Message(BOOKS_FAILED.into()))
    );
}

#[test]
fn test_found_books_reset_cursor() {
    let mut app = create_test_app(offline_config());
    let books: Vec<Book> = (0..3)
        .map(|i| Book {
            title: format!("Book {i}"),
            authors: None,
            description: None,
            link: "#".into(),
        })
        .collect();

    let token = app.requests.begin(SlotId::BookResults);
    app.handle_message(AppMessage::BooksLoaded {
        token,
        result: Ok(BookSearch::Found(books.clone())),
    });
    app.ui.active = SiteSection::Books;
    app.execute_command(AppCommand::CursorDown);
    app.execute_command(AppCommand::CursorDown);
    assert_eq!(app.active_page().unwrap().cursor(), 2);

    let token = app.requests.begin(SlotId::BookResults);
    app.handle_message(AppMessage::BooksLoaded {
        token,
        result: Ok(BookSearch::Found(books)),
    });
    assert_eq!(app.active_page().unwrap().cursor(), 0);
}

#[test]
fn test_quote_batch_failure_falls_back_to_catalog() {
    let mut app = create_test_app(offline_config());
    let token = app.requests.begin(SlotId::DailyQuote);
    app.handle_message(AppMessage::QuoteBatchLoaded {
        token,
        result: Err("unreachable".into()),
    });

    let quote = text(&app, SiteSection::Home, SlotId::DailyQuote);
    assert!(app.catalog.quotes().iter().any(|q| q == quote));
}

#[test]
fn test_quote_batch_success_updates_every_daily_quote() {
    let mut app = create_test_app(offline_config());
    let token = app.requests.begin(SlotId::DailyQuote);
    app.handle_message(AppMessage::QuoteBatchLoaded {
        token,
        result: Ok(vec!["Act now. – Anon".into()]),
    });

    assert_eq!(text(&app, SiteSection::Home, SlotId::DailyQuote), "Act now. – Anon");
    assert_eq!(text(&app, SiteSection::Quotes, SlotId::DailyQuote), "Act now. – Anon");
}

#[test]
fn test_message_for_absent_slot_is_ignored() {
    let mut app = create_test_app(offline_config());
    app.site = Site::from_pages(vec![Page::with_slots(
        SiteSection::Home,
        &[SlotId::DailyQuote],
    )]);
    let before = app.site.clone();

    let token = app.requests.begin(SlotId::RandomAffirmation);
    app.handle_message(AppMessage::AffirmationLoaded {
        token,
        text: "You are enough.".into(),
    });
    assert_eq!(app.site, before);
}

// ========================================================================
// Commands
// ========================================================================

#[test]
fn test_input_context_prefers_popups() {
    let mut app = create_test_app(offline_config());
    assert_eq!(app.get_input_context(), InputContext::Page(SiteSection::Home));

    app.ui.open_book_search();
    assert_eq!(app.get_input_context(), InputContext::SearchInput);

    app.ui.show_message("hi");
    assert_eq!(app.get_input_context(), InputContext::MessagePopup);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.ui.popup_state, PopupState::None);
}

#[test]
fn test_key_events_dismiss_then_quit() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let mut app = create_test_app(offline_config());
    app.ui.active = SiteSection::Books;
    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(app.ui.popup_state, PopupState::None);
    assert!(!app.exit);

    app.handle_key_event(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE));
    assert_eq!(app.get_input_context(), InputContext::SearchInput);
    app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert_eq!(app.ui.popup_state.as_search(), Some("q"));
    assert!(!app.exit);

    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!app.ui.has_active_popup());
    app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(app.exit);
}

#[test]
fn test_activate_toggles_selected_section_only() {
    let mut app = create_test_app(offline_config());
    app.ui.active = SiteSection::Affirmations;
    app.execute_command(AppCommand::CursorDown);
    app.execute_command(AppCommand::Activate);

    let SlotContent::Categories(sections) =
        slot(&app, SiteSection::Affirmations, SlotId::AllAffirmations)
    else {
        panic!("expected categories");
    };
    assert_eq!(sections[0].state(), ExpandState::Collapsed);
    assert_eq!(sections[1].state(), ExpandState::Expanded);
    assert_eq!(sections[1].visible().len(), 5);
}

#[test]
fn test_layout_toggle_rebuilds_affirmations() {
    let mut app = create_test_app(offline_config());
    app.ui.active = SiteSection::Affirmations;
    app.execute_command(AppCommand::Activate);
    app.execute_command(AppCommand::ToggleLayout);
    assert_eq!(app.affirmation_layout, AffirmationLayout::Paged);
    assert!(app.ui.toast.is_some());

    app.execute_command(AppCommand::GoToPage(2));
    let SlotContent::PagedCategories(categories) =
        slot(&app, SiteSection::Affirmations, SlotId::AllAffirmations)
    else {
        panic!("expected paged categories");
    };
    assert_eq!(categories[0].list.state().current_page(), 2);
    assert_eq!(categories[1].list.state().current_page(), 1);

    app.execute_command(AppCommand::ToggleLayout);
    let SlotContent::Categories(sections) =
        slot(&app, SiteSection::Affirmations, SlotId::AllAffirmations)
    else {
        panic!("expected categories");
    };
    assert_eq!(sections[0].state(), ExpandState::Collapsed);
}

#[test]
fn test_local_quote_paging() {
    let mut app = create_test_app(offline_config());
    app.ui.active = SiteSection::Quotes;

    app.execute_command(AppCommand::GoToPage(3));
    app.execute_command(AppCommand::GoToPage(9));
    app.execute_command(AppCommand::NextPage);
    let SlotContent::Paged(list) = slot(&app, SiteSection::Quotes, SlotId::QuotesContainer) else {
        panic!("expected local list");
    };
    assert_eq!(list.state().current_page(), 4);
    assert_eq!(list.visible(), &app.catalog.quotes()[15..20]);

    app.execute_command(AppCommand::NextPage);
    app.execute_command(AppCommand::PrevPage);
    let SlotContent::Paged(list) = slot(&app, SiteSection::Quotes, SlotId::QuotesContainer) else {
        panic!("expected local list");
    };
    assert_eq!(list.state().current_page(), 3);
}

#[tokio::test]
async fn test_remote_page_activation_starts_new_generation() {
    let mut app = create_test_app(unreachable_config());
    let first = app.requests.begin(SlotId::QuotesContainer);
    app.handle_message(AppMessage::QuotesLoaded {
        token: first,
        page: 1,
        result: Ok(quotes_page(&["a", "b"], 3)),
    });

    app.ui.active = SiteSection::Quotes;
    app.execute_command(AppCommand::GoToPage(1));
    assert!(app.requests.is_current(first), "disabled control must not load");

    app.execute_command(AppCommand::GoToPage(3));
    assert!(!app.requests.is_current(first));
    let pager = remote_pager(&app);
    assert_eq!(pager.current_page(), 3);
    assert_eq!(pager.body(), &RemoteBody::Loading);

    // the superseded page-1 response must not overwrite the page-3 view
    app.handle_message(AppMessage::QuotesLoaded {
        token: first,
        page: 1,
        result: Ok(quotes_page(&["late"], 3)),
    });
    assert_eq!(remote_pager(&app).body(), &RemoteBody::Loading);
}

#[tokio::test]
async fn test_shrunk_quotes_page_count_reloads_last_page() {
    let mut app = create_test_app(unreachable_config());
    let first = app.requests.begin(SlotId::QuotesContainer);
    app.handle_message(AppMessage::QuotesLoaded {
        token: first,
        page: 1,
        result: Ok(quotes_page(&["a", "b"], 4)),
    });

    app.ui.active = SiteSection::Quotes;
    app.execute_command(AppCommand::GoToPage(4));
    let page_four = app.requests.begin(SlotId::QuotesContainer);

    // the service now reports only two pages
    app.handle_message(AppMessage::QuotesLoaded {
        token: page_four,
        page: 4,
        result: Ok(quotes_page(&["from page four"], 2)),
    });

    assert!(!app.requests.is_current(page_four), "a reload must be issued");
    let pager = remote_pager(&app);
    assert_eq!(pager.current_page(), 2);
    assert_eq!(pager.total_pages(), 2);
    assert_eq!(pager.body(), &RemoteBody::Loading);
}

#[test]
fn test_contact_form_via_commands() {
    let mut app = create_test_app(offline_config());
    app.ui.active = SiteSection::Contact;

    for c in "Ann".chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
    app.execute_command(AppCommand::Submit);

    let SlotContent::Contact(form) = slot(&app, SiteSection::Contact, SlotId::ContactForm) else {
        panic!("expected form");
    };
    assert_eq!(form.name.value, "Ann");
    assert!(!form.name.invalid);
    assert_eq!(form.message.error, Some(MESSAGE_ERROR));
    assert!(!form.success_visible);

    app.execute_command(AppCommand::SwitchField);
    for c in "Hi!".chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
    app.execute_command(AppCommand::Submit);

    let SlotContent::Contact(form) = slot(&app, SiteSection::Contact, SlotId::ContactForm) else {
        panic!("expected form");
    };
    assert!(form.success_visible);
    assert!(form.name.value.is_empty() && form.message.value.is_empty());
    assert_eq!(form.active, ContactField::Name);
    assert!(!SUCCESS_MESSAGE.is_empty());
}

#[test]
fn test_typing_outside_contact_page_is_ignored() {
    let mut app = create_test_app(offline_config());
    app.execute_command(AppCommand::TypeChar('x'));
    let SlotContent::Contact(form) = slot(&app, SiteSection::Contact, SlotId::ContactForm) else {
        panic!("expected form");
    };
    assert!(form.name.value.is_empty());
}

#[test]
fn test_offline_book_search() {
    let mut app = create_test_app(offline_config());
    app.ui.active = SiteSection::Books;
    app.execute_command(AppCommand::OpenSearch);
    for c in "stoic".chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
    app.execute_command(AppCommand::Submit);

    assert!(!app.ui.has_active_popup());
    assert_eq!(
        slot(&app, SiteSection::Books, SlotId::BookResults),
        &SlotContent::Books(BookResults::Message(BOOKS_OFFLINE.into()))
    );
}

#[test]
fn test_offline_affirmation_comes_from_catalog() {
    let mut app = create_test_app(offline_config());
    app.execute_command(AppCommand::FetchAffirmation);
    let shown = text(&app, SiteSection::Home, SlotId::RandomAffirmation);
    assert!(app.catalog.affirmations().iter().any(|a| a == shown));
}

#[test]
fn test_quit_and_section_cycle() {
    let mut app = create_test_app(offline_config());
    app.execute_command(AppCommand::PrevSection);
    assert_eq!(app.ui.active, SiteSection::Contact);
    app.execute_command(AppCommand::NextSection);
    assert_eq!(app.ui.active, SiteSection::Home);

    app.execute_command(AppCommand::Quit);
    assert!(app.exit);
}
