//! Remote loads and other side-effecting actions.
//!
//! Every load takes a fresh [`RequestToken`](super::RequestToken) for its slot
//! before the task is spawned, so a later load for the same slot supersedes it.

use std::future::Future;

use crate::constants::{
    BOOKS_OFFLINE, LOADING_MESSAGE, NO_LINK_MESSAGE, SEARCHING_MESSAGE, TOAST_TICKS,
};
use crate::domain::{DailyPicks, pick};

use super::{App, AppMessage, BookResults, SiteSection, SlotContent, SlotId};

impl App {
    /// Spawns `task` and forwards its message to the main loop.
    fn spawn_load<F>(&self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(task.await);
        });
    }

    // ========================================================================
    // Quotes
    // ========================================================================

    /// Requests page `page` of the quotes list.
    ///
    /// In offline mode, or when the quotes slot holds a local list, nothing is
    /// sent.
    pub(crate) fn load_quotes_page(&mut self, page: usize) {
        if self.config.offline {
            return;
        }

        let mut page_size = None;
        for p in self.site.pages_mut() {
            if let Some(SlotContent::Remote(pager)) = p.slot_mut(SlotId::QuotesContainer) {
                pager.begin(page);
                page_size = Some(pager.page_size());
            }
        }
        let Some(page_size) = page_size else {
            return;
        };

        let token = self.requests.begin(SlotId::QuotesContainer);
        let fetcher = self.fetcher.clone();
        let tags = self.config.quote_tags.clone();
        tracing::info!(page, page_size, "loading quotes page");

        self.spawn_load(async move {
            let result = fetcher
                .quotes_page(page, page_size, &tags)
                .await
                .map_err(|e| e.to_string());
            AppMessage::QuotesLoaded {
                token,
                page,
                result,
            }
        });
    }

    /// Reloads the current quotes page.
    pub(crate) fn reload_quotes(&mut self) {
        let current = self.site.page(SiteSection::Quotes).and_then(|page| {
            match page.slot(SlotId::QuotesContainer) {
                Some(SlotContent::Remote(pager)) => Some(pager.current_page()),
                _ => None,
            }
        });
        if let Some(page) = current {
            self.load_quotes_page(page);
        }
    }

    /// Replaces the daily quote with a fresh one.
    ///
    /// Online, a batch is requested from the quote service; offline, or when
    /// that fails, the quote is picked from the local catalog.
    pub(crate) fn refresh_daily_quote(&mut self) {
        if self.config.offline {
            self.pick_local_daily_quote();
            return;
        }

        let token = self.requests.begin(SlotId::DailyQuote);
        let fetcher = self.fetcher.clone();
        self.site
            .render_everywhere(|page| page.render_text(SlotId::DailyQuote, LOADING_MESSAGE));

        self.spawn_load(async move {
            let result = fetcher.quote_batch().await.map_err(|e| e.to_string());
            AppMessage::QuoteBatchLoaded { token, result }
        });
    }

    pub(crate) fn pick_local_daily_quote(&mut self) {
        let Some(picks) = DailyPicks::choose(&self.catalog, &mut rand::thread_rng()) else {
            return;
        };
        self.site
            .render_everywhere(|page| page.render_text(SlotId::DailyQuote, picks.quote.as_str()));
    }

    // ========================================================================
    // Affirmations
    // ========================================================================

    /// Requests a random affirmation for the Home page display.
    pub(crate) fn fetch_random_affirmation(&mut self) {
        if self.config.offline {
            let text = pick(self.catalog.affirmations(), &mut rand::thread_rng()).cloned();
            if let Some(text) = text {
                self.site.render_everywhere(|page| {
                    page.render_text(SlotId::RandomAffirmation, text.as_str())
                });
            }
            return;
        }

        let token = self.requests.begin(SlotId::RandomAffirmation);
        let fetcher = self.fetcher.clone();
        self.site
            .render_everywhere(|page| page.render_text(SlotId::RandomAffirmation, LOADING_MESSAGE));

        self.spawn_load(async move {
            let text = fetcher.random_affirmation().await;
            AppMessage::AffirmationLoaded { token, text }
        });
    }

    /// Switches the affirmations page between teaser sections and paginators.
    pub(crate) fn toggle_affirmation_layout(&mut self) {
        self.affirmation_layout = self.affirmation_layout.toggled();
        self.render_affirmations();
        tracing::info!(layout = self.affirmation_layout.label(), "affirmation layout switched");
        self.ui.show_toast(
            format!("Layout: {}", self.affirmation_layout.label()),
            TOAST_TICKS,
        );
    }

    // ========================================================================
    // Books
    // ========================================================================

    /// Starts a book search for `query`.
    pub(crate) fn search_books(&mut self, query: String) {
        if self.config.offline {
            self.site.render_everywhere(|page| {
                page.render_book_results(
                    SlotId::BookResults,
                    BookResults::Message(BOOKS_OFFLINE.to_string()),
                )
            });
            return;
        }

        let token = self.requests.begin(SlotId::BookResults);
        let fetcher = self.fetcher.clone();
        self.site.render_everywhere(|page| {
            page.render_book_results(
                SlotId::BookResults,
                BookResults::Searching(SEARCHING_MESSAGE.to_string()),
            )
        });
        tracing::info!(%query, "searching books");

        self.spawn_load(async move {
            let result = fetcher.search_books(&query).await.map_err(|e| e.to_string());
            AppMessage::BooksLoaded { token, result }
        });
    }

    /// Opens the selected book's link in the browser.
    pub(crate) fn open_selected_book(&mut self) {
        let Some(page) = self.active_page() else {
            return;
        };
        let cursor = page.cursor();
        let link = match page.primary() {
            Some(SlotContent::Books(BookResults::Found(books))) => books
                .get(cursor)
                .map(|book| (book.has_link(), book.link.clone())),
            _ => None,
        };

        match link {
            Some((true, url)) => match open::that(&url) {
                Ok(()) => self.ui.show_toast("[+] Opened in browser", TOAST_TICKS),
                Err(err) => {
                    tracing::warn!(%url, %err, "could not open link");
                    self.ui.show_message(format!("Could not open link: {err}"));
                }
            },
            Some((false, _)) => self.ui.show_message(NO_LINK_MESSAGE),
            None => {}
        }
    }
}
