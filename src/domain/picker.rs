//! Uniform random selection for the daily quote and affirmation.

use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::ContentCatalog;

/// Picks one element uniformly at random.
///
/// Returns `None` for an empty slice; the catalog never hands us one.
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// RNG seeded from a calendar date, so "daily" picks hold for the whole day.
#[must_use]
pub fn daily_rng(date: NaiveDate) -> StdRng {
    StdRng::seed_from_u64(u64::from(date.num_days_from_ce().unsigned_abs()))
}

/// The pair of items shown in the daily slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPicks {
    pub quote: String,
    pub affirmation: String,
}

impl DailyPicks {
    /// Draws one quote and one affirmation from the catalog.
    pub fn choose<R: Rng + ?Sized>(catalog: &ContentCatalog, rng: &mut R) -> Option<Self> {
        let quote = pick(catalog.quotes(), rng)?.clone();
        let affirmation = pick(catalog.affirmations(), rng)?.clone();
        Some(Self { quote, affirmation })
    }
}

// ============================================================================
// Tests
// ============================================================================
