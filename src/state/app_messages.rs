//! Message processing for completed background loads.
//!
//! A message whose token is no longer current for its slot is dropped before
//! it can touch any page.

use crate::constants::{BOOKS_FAILED, BOOKS_NONE, QUOTES_FAILED};
use crate::domain::{BookSearch, QuotesPage, pick};

use super::{App, AppMessage, BookResults, RequestToken, SlotContent, SlotId};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        let token = message_token(&message);
        if !self.requests.is_current(token) {
            tracing::debug!(
                slot = %token.slot(),
                generation = token.generation(),
                "stale response dropped"
            );
            return;
        }

        match message {
            AppMessage::QuotesLoaded { page, result, .. } => {
                self.apply_quotes_page(page, result);
            }
            AppMessage::AffirmationLoaded { text, .. } => {
                self.site.render_everywhere(|p| {
                    p.render_text(SlotId::RandomAffirmation, text.as_str())
                });
            }
            AppMessage::BooksLoaded { result, .. } => {
                let results = match result {
                    Ok(BookSearch::Found(books)) => BookResults::Found(books),
                    Ok(BookSearch::NoResults) => BookResults::Message(BOOKS_NONE.to_string()),
                    Err(error) => {
                        tracing::warn!(%error, "book search failed");
                        BookResults::Message(BOOKS_FAILED.to_string())
                    }
                };
                self.site.render_everywhere(|p| {
                    p.render_book_results(SlotId::BookResults, results.clone())
                });
            }
            AppMessage::QuoteBatchLoaded { result, .. } => {
                let fresh = match result {
                    Ok(quotes) => pick(&quotes, &mut rand::thread_rng()).cloned(),
                    Err(error) => {
                        tracing::warn!(%error, "quote batch failed, using local catalog");
                        None
                    }
                };
                match fresh {
                    Some(quote) => {
                        self.site.render_everywhere(|p| {
                            p.render_text(SlotId::DailyQuote, quote.as_str())
                        });
                    }
                    None => self.pick_local_daily_quote(),
                }
            }
        }
    }

    fn apply_quotes_page(&mut self, page: usize, result: Result<QuotesPage, String>) {
        if let Err(error) = &result {
            tracing::warn!(page, %error, "quotes page failed");
        }

        let mut reload = None;
        for p in self.site.pages_mut() {
            let Some(SlotContent::Remote(pager)) = p.slot_mut(SlotId::QuotesContainer) else {
                continue;
            };
            match &result {
                Ok(loaded) => {
                    reload = pager
                        .apply_loaded(loaded.items.clone(), loaded.total_pages)
                        .or(reload);
                }
                Err(_) => pager.apply_failed(QUOTES_FAILED),
            }
        }

        if let Some(last) = reload {
            tracing::info!(requested = page, last, "quotes page count shrank, reloading");
            self.load_quotes_page(last);
        }
    }
}

const fn message_token(message: &AppMessage) -> RequestToken {
    match message {
        AppMessage::QuotesLoaded { token, .. }
        | AppMessage::AffirmationLoaded { token, .. }
        | AppMessage::BooksLoaded { token, .. }
        | AppMessage::QuoteBatchLoaded { token, .. } => *token,
    }
}
