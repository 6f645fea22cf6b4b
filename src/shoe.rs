//! The shoe: the ordered sequence of undealt cards a round or trainer draws
//! from.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// Builds `num_decks` copies of the 52-card cross-product.
fn fresh_cards(num_decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(usize::from(num_decks) * DECK_SIZE);
    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

/// How a shoe was constructed, and therefore how it behaves on exhaustion.
#[derive(Debug)]
enum Mode {
    /// Backed by a seeded RNG; reshuffles a fresh `num_decks`-deck shoe on
    /// exhaustion instead of failing.
    Random { num_decks: u8, rng: ChaCha8Rng },
    /// Backed by a fixed preset sequence (tests, literal scenarios).
    /// Exhaustion is an error — §4.1: "drawing from a preset shoe that is
    /// empty fails with Exhausted."
    Deterministic,
}

/// The ordered sequence of undealt cards, plus penetration bookkeeping.
///
/// Two construction modes share one type (§4.1 / DESIGN.md module ledger):
/// [`Shoe::new`] builds a real shuffled shoe from a seeded RNG; draws from an
/// exhausted random shoe silently rebuild and reshuffle. [`Shoe::new_deterministic`]
/// takes a fixed preset sequence for tests and literal scenarios; draws from
/// an exhausted deterministic shoe return [`ShoeError::Exhausted`].
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    capacity: usize,
    penetration: f64,
    /// Cards dealt since the shoe was last (re)built.
    dealt: usize,
    mode: Mode,
}

impl Shoe {
    /// Builds a freshly shuffled random shoe.
    ///
    /// `penetration` is the fraction of the shoe dealt before
    /// [`Shoe::needs_reshuffle`] reports true; `seed` makes shuffling
    /// reproducible for a given run without weakening real use (callers
    /// should seed from external entropy in production).
    #[must_use]
    pub fn new(num_decks: u8, penetration: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = fresh_cards(num_decks);
        cards.shuffle(&mut rng);
        let capacity = cards.len();
        Self {
            cards,
            capacity,
            penetration,
            dealt: 0,
            mode: Mode::Random { num_decks, rng },
        }
    }

    /// Builds a deterministic shoe from a fixed card sequence, dealt in the
    /// given order (`preset_cards[0]` is drawn first).
    #[must_use]
    pub fn new_deterministic(preset_cards: Vec<Card>) -> Self {
        let capacity = preset_cards.len();
        // Internally cards are drawn from the back (`Vec::pop`), so the
        // preset order is reversed once up front.
        let mut cards = preset_cards;
        cards.reverse();
        Self {
            cards,
            capacity,
            penetration: 1.0,
            dealt: 0,
            mode: Mode::Deterministic,
        }
    }

    /// Draws one card from the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] only for a deterministic shoe that
    /// has run out of preset cards. A random shoe rebuilds and reshuffles
    /// instead of failing.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        if let Some(card) = self.cards.pop() {
            self.dealt += 1;
            return Ok(card);
        }

        match &mut self.mode {
            Mode::Deterministic => Err(ShoeError::Exhausted),
            Mode::Random { num_decks, rng } => {
                let mut cards = fresh_cards(*num_decks);
                cards.shuffle(rng);
                self.capacity = cards.len();
                self.cards = cards;
                self.dealt = 0;
                let card = self
                    .cards
                    .pop()
                    .expect("a freshly built shoe always has at least one card");
                self.dealt += 1;
                Ok(card)
            }
        }
    }

    /// Cards left undealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Estimated decks remaining (`remaining / 52`).
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "shoe sizes are small enough for f64 to represent exactly"
        )]
        let remaining = self.remaining() as f64;
        remaining / DECK_SIZE as f64
    }

    /// Whether cards dealt since the last (re)build meet or exceed
    /// `capacity * penetration`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        #[expect(
            clippy::cast_precision_loss,
            reason = "shoe sizes are small enough for f64 to represent exactly"
        )]
        let threshold = self.capacity as f64 * self.penetration;
        #[expect(
            clippy::cast_precision_loss,
            reason = "shoe sizes are small enough for f64 to represent exactly"
        )]
        let dealt = self.dealt as f64;
        dealt >= threshold
    }

    /// Rebuilds and reshuffles the shoe.
    ///
    /// For a random shoe this draws a fresh seeded shuffle from the same
    /// RNG stream (not a new seed). For a deterministic shoe this re-uses
    /// the *original* preset sequence from the start — callers that want a
    /// deterministic shoe to run dry permanently (e.g. to exercise
    /// `Exhausted`) should not call this.
    pub fn rebuild_and_shuffle(&mut self) {
        match &mut self.mode {
            Mode::Random { num_decks, rng } => {
                let mut cards = fresh_cards(*num_decks);
                cards.shuffle(rng);
                self.capacity = cards.len();
                self.cards = cards;
                self.dealt = 0;
            }
            Mode::Deterministic => {
                // Deterministic shoes are never asked to rebuild by the
                // Round Engine (penetration is irrelevant once a preset
                // sequence has been handed in), but the operation is kept
                // total rather than panicking.
                self.dealt = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn preset(cards: &[(Rank, Suit)]) -> Shoe {
        Shoe::new_deterministic(cards.iter().map(|&(r, s)| Card::new(r, s)).collect())
    }

    #[test]
    fn draws_preset_cards_in_order() {
        let mut shoe = preset(&[
            (Rank::Ace, Suit::Hearts),
            (Rank::King, Suit::Spades),
        ]);
        assert_eq!(shoe.draw().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(shoe.draw().unwrap(), Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn deterministic_shoe_exhausts() {
        let mut shoe = preset(&[(Rank::Two, Suit::Clubs)]);
        shoe.draw().unwrap();
        assert_eq!(shoe.draw().unwrap_err(), ShoeError::Exhausted);
    }

    #[test]
    fn random_shoe_rebuilds_on_exhaustion() {
        let mut shoe = Shoe::new(1, 0.75, 7);
        for _ in 0..DECK_SIZE {
            shoe.draw().unwrap();
        }
        // The 53rd draw exhausts the first build; it must rebuild silently.
        assert!(shoe.draw().is_ok());
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn needs_reshuffle_reflects_penetration() {
        let mut shoe = Shoe::new(1, 0.5, 3);
        assert!(!shoe.needs_reshuffle());
        for _ in 0..26 {
            shoe.draw().unwrap();
        }
        assert!(shoe.needs_reshuffle());
    }

    #[test]
    fn card_conservation_until_rebuild() {
        let mut shoe = Shoe::new(2, 0.75, 11);
        let capacity = shoe.remaining();
        for _ in 0..10 {
            shoe.draw().unwrap();
        }
        assert_eq!(shoe.remaining() + 10, capacity);
    }
}
