//! Application lifecycle management.
//!
//! - `new()` - builds every page and renders its startup content
//! - `run()` - main event loop
//! - `start_initial_loads()` - first remote requests

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Local;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::client::ContentFetcher;
use crate::constants::{AFFIRMATION_PROMPT, TICK_RATE};
use crate::domain::{ContentCatalog, DailyPicks, daily_rng};
use crate::tui::Tui;
use crate::ui;

use super::{
    AffirmationLayout, App, AppConfig, BookResults, RequestTracker, Site, SlotId, StartupOptions,
    UiState,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates the app and renders every page's startup content.
    ///
    /// No request is sent here; see [`App::start_initial_loads`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        config: AppConfig,
        catalog: Arc<ContentCatalog>,
        startup_options: StartupOptions,
    ) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let fetcher = ContentFetcher::new(config.http_config())?;

        let mut app = Self {
            site: Site::new(),
            ui: UiState::new(startup_options.section.unwrap_or_default()),
            affirmation_layout: config.affirmation_layout,
            config,
            catalog,
            exit: false,
            requests: RequestTracker::new(),
            message_tx,
            message_rx,
            fetcher,
        };
        app.bootstrap();
        Ok(app)
    }

    /// Fills every slot that has startup content.
    ///
    /// Each step targets one slot id on every page; pages without that slot
    /// are skipped.
    pub(crate) fn bootstrap(&mut self) {
        self.render_daily_picks();
        self.render_affirmations();

        self.site
            .render_everywhere(|page| page.render_text(SlotId::RandomAffirmation, AFFIRMATION_PROMPT));
        self.site
            .render_everywhere(|page| page.render_book_results(SlotId::BookResults, BookResults::Idle));
        self.site
            .render_everywhere(|page| page.render_contact_form(SlotId::ContactForm));

        let per_page = self.config.items_per_page;
        if self.config.offline {
            let quotes = self.catalog.quotes().to_vec();
            self.site.render_everywhere(|page| {
                page.render_paged_list(SlotId::QuotesContainer, quotes.clone(), per_page)
            });
        } else {
            self.site
                .render_everywhere(|page| page.render_remote_pager(SlotId::QuotesContainer, per_page));
        }

        tracing::info!(
            offline = self.config.offline,
            layout = self.affirmation_layout.label(),
            affirmations = self.catalog.affirmations().len(),
            quotes = self.catalog.quotes().len(),
            "site bootstrapped"
        );
    }

    /// Draws the daily quote and affirmation into their slots.
    pub(crate) fn render_daily_picks(&mut self) {
        let picks = if self.config.stable_daily {
            DailyPicks::choose(&self.catalog, &mut daily_rng(Local::now().date_naive()))
        } else {
            DailyPicks::choose(&self.catalog, &mut rand::thread_rng())
        };
        let Some(picks) = picks else {
            tracing::warn!("catalog has nothing to pick from");
            return;
        };

        self.site
            .render_everywhere(|page| page.render_text(SlotId::DailyQuote, picks.quote.as_str()));
        self.site.render_everywhere(|page| {
            page.render_text(SlotId::DailyAffirmation, picks.affirmation.as_str())
        });
    }

    /// Renders the affirmations slot in the current layout.
    pub(crate) fn render_affirmations(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        let per_page = self.config.items_per_page;
        match self.affirmation_layout {
            AffirmationLayout::Expandable => self.site.render_everywhere(|page| {
                page.render_category_content(SlotId::AllAffirmations, &catalog)
            }),
            AffirmationLayout::Paged => self.site.render_everywhere(|page| {
                page.render_category_pagination(SlotId::AllAffirmations, &catalog, per_page)
            }),
        };
    }

    /// Sends the requests the site needs right after startup.
    pub(crate) fn start_initial_loads(&mut self) {
        if !self.config.offline {
            self.load_quotes_page(1);
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_initial_loads();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            // let spawned fetches make progress between polls
            tokio::task::yield_now().await;
        }

        tracing::info!("exiting");
        Ok(())
    }
}
