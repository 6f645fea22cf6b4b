//! Hi-Lo card counting.

use crate::card::Card;

/// Tracks the running Hi-Lo count across a shoe's lifetime.
///
/// §4.2: every card seen — including the dealer's hole card, but only once
/// it is revealed (§4.5) — updates the running count by
/// [`Card::hi_lo_delta`]. The Round Engine is responsible for calling
/// [`Counter::update`] at the right moments; `Counter` itself has no notion
/// of phases or hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter {
    running_count: i32,
}

impl Counter {
    /// A counter at the start of a fresh shoe.
    #[must_use]
    pub const fn new() -> Self {
        Self { running_count: 0 }
    }

    /// Folds one card's Hi-Lo delta into the running count.
    pub fn update(&mut self, card: Card) {
        self.running_count += card.hi_lo_delta();
    }

    /// Folds every card's Hi-Lo delta into the running count, in order.
    pub fn update_many<'a>(&mut self, cards: impl IntoIterator<Item = &'a Card>) {
        for card in cards {
            self.update(*card);
        }
    }

    /// The running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// The true count: `running_count / max(0.5, decks_remaining)`.
    ///
    /// The `0.5` floor keeps the result finite and bounded as the shoe runs
    /// low, rather than diverging near the end of the shoe.
    #[must_use]
    pub fn true_count(&self, decks_remaining: f64) -> f64 {
        f64::from(self.running_count) / decks_remaining.max(0.5)
    }

    /// Resets the running count to zero, as happens on reshuffle (§4.2).
    pub fn reset(&mut self) {
        self.running_count = 0;
    }
}
