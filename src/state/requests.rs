//! Per-slot request generations.
//!
//! Starting a load for a slot bumps that slot's generation and hands out a
//! token. When the response arrives, only the token of the latest load for the
//! slot is current; responses from superseded loads are dropped.

use std::collections::HashMap;

use super::site::SlotId;

/// Identifies one in-flight load for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    slot: SlotId,
    generation: u64,
}

impl RequestToken {
    #[must_use]
    pub const fn slot(&self) -> SlotId {
        self.slot
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    generations: HashMap<SlotId, u64>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load for `slot`, superseding any earlier one.
    pub fn begin(&mut self, slot: SlotId) -> RequestToken {
        let generation = self.generations.entry(slot).or_insert(0);
        *generation += 1;
        RequestToken {
            slot,
            generation: *generation,
        }
    }

    /// Whether `token` belongs to the latest load for its slot.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generations.get(&token.slot) == Some(&token.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(SlotId::QuotesContainer);
        assert!(tracker.is_current(first));

        let second = tracker.begin(SlotId::QuotesContainer);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn test_slots_are_tracked_independently() {
        let mut tracker = RequestTracker::new();
        let quotes = tracker.begin(SlotId::QuotesContainer);
        let books = tracker.begin(SlotId::BookResults);
        let _ = tracker.begin(SlotId::BookResults);

        assert!(tracker.is_current(quotes));
        assert!(!tracker.is_current(books));
        assert_eq!(quotes.slot(), SlotId::QuotesContainer);
    }
}
