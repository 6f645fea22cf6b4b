//! Player and dealer hand representations.

use std::fmt::Write as _;

use crate::card::Card;
use crate::outcome::Outcome;

/// Computes `(best_total, is_soft)` for a card sequence.
///
/// Sums base values (Ace = 11), then reduces one Ace at a time from 11 to 1
/// while the total exceeds 21 and an Ace is still available to reduce.
/// `is_soft` is true only if the final total is at most 21 *and* at least
/// one Ace is still being counted as 11.
#[must_use]
pub fn best_total_and_soft(cards: &[Card]) -> (u8, bool) {
    let mut total: i32 = 0;
    let mut aces_as_eleven: i32 = 0;

    for card in cards {
        total += i32::from(card.base_value());
        if card.rank == crate::card::Rank::Ace {
            aces_as_eleven += 1;
        }
    }

    while total > 21 && aces_as_eleven > 0 {
        total -= 10;
        aces_as_eleven -= 1;
    }

    let is_soft = aces_as_eleven > 0 && total <= 21;
    #[expect(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        reason = "total is bounded by 21 * card count, always representable in u8 once clamped"
    )]
    let total_u8 = total.clamp(0, u8::MAX as i32) as u8;
    (total_u8, is_soft)
}

/// Whether a two-card hand is a natural (not applicable to split hands —
/// callers check `is_split_child` separately).
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && best_total_and_soft(cards).0 == 21
}

/// Whether a hand's best total exceeds 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    best_total_and_soft(cards).0 > 21
}

/// Whether a two-card hand is splittable.
///
/// Same rank always qualifies. When `allow_by_value` is set, two distinct
/// ten-valued ranks (e.g. King + Queen) also qualify — the
/// `allow_split_by_value` config flag (§9 Open Question 2).
#[must_use]
pub fn can_split(cards: &[Card], allow_by_value: bool) -> bool {
    if cards.len() != 2 {
        return false;
    }
    let (a, b) = (cards[0], cards[1]);
    a.rank == b.rank || (allow_by_value && a.base_value() == b.base_value())
}

/// Renders a hand as card glyphs followed by its total, e.g. `"A♠ K♥ (21)"`,
/// with `" (soft)"` appended when applicable.
#[must_use]
pub fn format_hand(cards: &[Card]) -> String {
    let (total, soft) = best_total_and_soft(cards);
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{card}");
    }
    let _ = write!(out, " ({total})");
    if soft {
        out.push_str(" (soft)");
    }
    out
}

/// A player's hand: an ordered card sequence plus the bookkeeping the Round
/// Engine needs to resolve it (§3 "Hand").
#[derive(Debug, Clone)]
pub struct Hand {
    /// Stable ID, used by Stats and by snapshots to track a hand across
    /// inserts caused by splits.
    id: u32,
    cards: Vec<Card>,
    bet: i64,
    is_doubled: bool,
    is_split_child: bool,
    /// Still eligible for player actions.
    is_active: bool,
    /// Has a terminal outcome (assigned either immediately, e.g. bust or
    /// natural, or at showdown).
    resolved: bool,
    outcome: Option<Outcome>,
}

impl Hand {
    /// Creates a new two-card-pending hand with the given bet.
    #[must_use]
    pub fn new(id: u32, bet: i64) -> Self {
        Self {
            id,
            cards: Vec::new(),
            bet,
            is_doubled: false,
            is_split_child: false,
            is_active: true,
            resolved: false,
            outcome: None,
        }
    }

    /// Creates a new hand from a split, seeded with the single card moved
    /// off the original hand.
    #[must_use]
    pub fn from_split(id: u32, card: Card, bet: i64) -> Self {
        Self {
            id,
            cards: vec![card],
            bet,
            is_doubled: false,
            is_split_child: true,
            is_active: true,
            resolved: false,
            outcome: None,
        }
    }

    /// Stable hand ID.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// `(best_total, is_soft)` for this hand.
    #[must_use]
    pub fn best_total_and_soft(&self) -> (u8, bool) {
        best_total_and_soft(&self.cards)
    }

    /// Best total, Ace reduced as needed.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.best_total_and_soft().0
    }

    /// Whether at least one Ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.best_total_and_soft().1
    }

    /// Whether this hand is a natural (two cards, 21, not from a split).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        !self.is_split_child && is_blackjack(&self.cards)
    }

    /// Whether this hand's total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Whether this hand can be split, given the `allow_split_by_value`
    /// config flag.
    #[must_use]
    pub fn can_split(&self, allow_by_value: bool) -> bool {
        can_split(&self.cards, allow_by_value)
    }

    /// Current bet staked on this hand.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Doubles the bet (double down).
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.is_doubled = true;
    }

    /// Whether this hand has been doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.is_doubled
    }

    /// Whether this hand was created by a split.
    #[must_use]
    pub const fn is_split_child(&self) -> bool {
        self.is_split_child
    }

    /// Marks this hand as a split child after the fact.
    ///
    /// Used on the original hand when a split occurs: [`Hand::from_split`]
    /// already marks the newly created hand, but the hand that stayed in
    /// place also loses its natural-blackjack eligibility the moment it
    /// gains a sibling.
    pub const fn mark_split_child(&mut self) {
        self.is_split_child = true;
    }

    /// Whether the hand is still eligible for player actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Marks the hand as no longer eligible for actions (stand, or a
    /// split-aces hand that only receives one card), without assigning a
    /// terminal outcome yet — it still awaits dealer comparison.
    pub const fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Whether this hand already has a terminal outcome.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The terminal outcome, if assigned.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Assigns a terminal outcome and deactivates the hand.
    pub const fn resolve(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.resolved = true;
        self.is_active = false;
    }

    /// Removes and returns the second card (used when splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Renders the hand as card glyphs plus total, e.g. `"A♠ K♥ (21)"`.
    #[must_use]
    pub fn format(&self) -> String {
        format_hand(&self.cards)
    }
}

/// The dealer's hand: cards plus whether the hole card has been revealed.
#[derive(Debug, Clone)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new, empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Appends a card (first call deals the up card, second the hole card).
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// All cards dealt to the dealer, regardless of reveal state.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The dealer's visible up card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    ///
    /// Callers must feed the hole card to the [`crate::counter::Counter`]
    /// at the same moment they call this — see the Round Engine's single
    /// `reveal_hole` subroutine, which does both atomically so this flag and
    /// the running count can never drift apart.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Value of only the visible cards (the up card alone, until revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.total()
        } else {
            self.up_card().map_or(0, Card::base_value)
        }
    }

    /// Full `(total, is_soft)` of the dealer's hand, revealed or not.
    #[must_use]
    pub fn best_total_and_soft(&self) -> (u8, bool) {
        best_total_and_soft(&self.cards)
    }

    /// Full total of the dealer's hand, revealed or not.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.best_total_and_soft().0
    }

    /// Whether the dealer's hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.best_total_and_soft().1
    }

    /// Whether the dealer has a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Whether the dealer's hand busted.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Number of cards dealt to the dealer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards have been dealt to the dealer yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }

    /// Renders the dealer's visible cards as glyphs, masking the hole card
    /// with `"??"` until revealed.
    #[must_use]
    pub fn format_visible(&self) -> String {
        if self.hole_revealed {
            return format_hand(&self.cards);
        }
        self.up_card().map_or_else(String::new, |up| {
            format!("{up} ??  ({})", up.base_value())
        })
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn soft_total_reduces_ace() {
        let cards = [c(Rank::Ace, Suit::Hearts), c(Rank::Nine, Suit::Clubs)];
        assert_eq!(best_total_and_soft(&cards), (20, true));
    }

    #[test]
    fn hard_total_after_bust_guard_reduction() {
        let cards = [
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Five, Suit::Spades),
        ];
        // 11 + 9 + 5 = 25 -> reduce ace to 1 -> 15, hard.
        assert_eq!(best_total_and_soft(&cards), (15, false));
    }

    #[test]
    fn two_aces_reduce_to_twelve() {
        let cards = [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Clubs)];
        assert_eq!(best_total_and_soft(&cards), (12, true));
    }

    #[test]
    fn blackjack_requires_exactly_two_cards() {
        let natural = [c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Clubs)];
        assert!(is_blackjack(&natural));

        let three_card_21 = [
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Seven, Suit::Spades),
        ];
        assert!(!is_blackjack(&three_card_21));
        assert!(!is_bust(&three_card_21));
    }

    #[test]
    fn split_hand_never_reports_blackjack() {
        let mut hand = Hand::from_split(1, c(Rank::Ace, Suit::Hearts), 100);
        hand.add_card(c(Rank::King, Suit::Clubs));
        assert_eq!(hand.total(), 21);
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn can_split_same_rank_always_true() {
        let cards = [c(Rank::Eight, Suit::Hearts), c(Rank::Eight, Suit::Clubs)];
        assert!(can_split(&cards, false));
        assert!(can_split(&cards, true));
    }

    #[test]
    fn can_split_by_value_gated_by_flag() {
        let cards = [c(Rank::King, Suit::Hearts), c(Rank::Queen, Suit::Clubs)];
        assert!(!can_split(&cards, false));
        assert!(can_split(&cards, true));
    }

    #[test]
    fn dealer_hand_masks_hole_card_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(c(Rank::Ace, Suit::Hearts));
        dealer.add_card(c(Rank::Six, Suit::Clubs));

        assert!(!dealer.is_hole_revealed());
        assert_eq!(dealer.visible_value(), 11);

        dealer.reveal_hole();
        assert!(dealer.is_hole_revealed());
        assert_eq!(dealer.visible_value(), 17);
        assert!(dealer.is_soft());
    }

    #[test]
    fn format_includes_soft_marker() {
        let cards = [c(Rank::Ace, Suit::Spades), c(Rank::Six, Suit::Hearts)];
        assert_eq!(format_hand(&cards), "A♠ 6♥ (17) (soft)");
    }
}
