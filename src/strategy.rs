//! Basic strategy and count-based deviations.
//!
//! One consolidated set of lookup tables replaces the scattered if/else
//! ladders and string action codes a hand-rolled strategy module tends to
//! accumulate (pairs, soft totals, hard totals, each indexed by dealer
//! upcard). Conditional cells such as `D/H` resolve against the caller's
//! [`Capabilities`] rather than encoding the game rules into the table
//! itself.
//!
//! The dealer upcard is keyed with Ace as **11**, the same value an Ace
//! carries everywhere else in this crate (`Rank::base_value`, the Counter);
//! it simply occupies the last table column rather than the first.

use crate::card::{Card, Rank};
use crate::hand::{best_total_and_soft, is_blackjack};
use crate::outcome::Action;

const DEALER_COLUMNS: usize = 10;

/// Maps a dealer upcard to its strategy-table column: `2..10` → `0..8`,
/// `Ace` → `9` (the last column, keeping Ace's value at 11 consistent with
/// the rest of the crate).
const fn dealer_column(rank: Rank) -> usize {
    match rank {
        Rank::Two => 0,
        Rank::Three => 1,
        Rank::Four => 2,
        Rank::Five => 3,
        Rank::Six => 4,
        Rank::Seven => 5,
        Rank::Eight => 6,
        Rank::Nine => 7,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 8,
        Rank::Ace => 9,
    }
}

/// A raw strategy-table cell, before capability resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Hit,
    Stand,
    Double,
    Split,
    /// Double if allowed, otherwise Hit.
    DoubleOrHit,
    /// Double if allowed, otherwise Stand.
    DoubleOrStand,
    /// Surrender if allowed, otherwise Hit.
    SurrenderOrHit,
    /// Surrender if allowed, otherwise Stand.
    SurrenderOrStand,
    /// Surrender if allowed, otherwise Split.
    SurrenderOrSplit,
}

impl Cell {
    const fn resolve(self, caps: Capabilities) -> Action {
        match self {
            Self::Hit => Action::Hit,
            Self::Stand => Action::Stand,
            Self::Split => {
                if caps.can_split {
                    Action::Split
                } else {
                    Action::Hit
                }
            }
            Self::Double | Self::DoubleOrHit => {
                if caps.can_double {
                    Action::Double
                } else {
                    Action::Hit
                }
            }
            Self::DoubleOrStand => {
                if caps.can_double {
                    Action::Double
                } else {
                    Action::Stand
                }
            }
            Self::SurrenderOrHit => {
                if caps.can_surrender {
                    Action::Surrender
                } else {
                    Action::Hit
                }
            }
            Self::SurrenderOrStand => {
                if caps.can_surrender {
                    Action::Surrender
                } else {
                    Action::Stand
                }
            }
            Self::SurrenderOrSplit => {
                if caps.can_surrender {
                    Action::Surrender
                } else if caps.can_split {
                    Action::Split
                } else {
                    Action::Hit
                }
            }
        }
    }
}

/// Which optional actions the active hand may take, supplied by the Round
/// Engine from its own rule configuration and the active hand's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The hand may double.
    pub can_double: bool,
    /// The hand may split (only consulted when the hand is a pair).
    pub can_split: bool,
    /// The hand may surrender.
    pub can_surrender: bool,
}

/// Pair rank bucket: same-rank pairs collapse to one row per source bucket
/// (`10`, `J`, `Q`, `K` share one row) unless `allow_split_by_value` lets a
/// mixed 10-valued pair reach the table at all — see [`pair_bucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairBucket {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Ace,
}

const fn pair_bucket(rank: Rank) -> PairBucket {
    match rank {
        Rank::Two => PairBucket::Two,
        Rank::Three => PairBucket::Three,
        Rank::Four => PairBucket::Four,
        Rank::Five => PairBucket::Five,
        Rank::Six => PairBucket::Six,
        Rank::Seven => PairBucket::Seven,
        Rank::Eight => PairBucket::Eight,
        Rank::Nine => PairBucket::Nine,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => PairBucket::Ten,
        Rank::Ace => PairBucket::Ace,
    }
}

/// Multi-deck, dealer-hits-soft-17, double-after-split basic strategy.
/// Rows: `A, 2..9, 10` (10-valued ranks share a row).
#[rustfmt::skip]
const PAIR_TABLE: [[Cell; DEALER_COLUMNS]; 10] = {
    use Cell::{Hit as H, Stand as S, Double as D, Split as P, SurrenderOrSplit as RP};
    [
        // 2     3  4  5  6  7  8  9  10   A
        [P, P, P, P, P, P, P, P, P, P], // Ace
        [P, P, P, P, P, P, H, H, H, H], // 2
        [P, P, P, P, P, P, H, H, H, H], // 3
        [H, H, H, P, P, H, H, H, H, H], // 4
        [D, D, D, D, D, D, D, D, H, H], // 5
        [P, P, P, P, P, H, H, H, H, H], // 6
        [P, P, P, P, P, P, H, H, H, H], // 7
        [P, P, P, P, P, P, P, P, P, RP], // 8
        [P, P, P, P, P, S, P, P, S, S], // 9
        [S, S, S, S, S, S, S, S, S, S], // 10
    ]
};

fn pair_row(bucket: PairBucket) -> &'static [Cell; DEALER_COLUMNS] {
    match bucket {
        PairBucket::Ace => &PAIR_TABLE[0],
        PairBucket::Two => &PAIR_TABLE[1],
        PairBucket::Three => &PAIR_TABLE[2],
        PairBucket::Four => &PAIR_TABLE[3],
        PairBucket::Five => &PAIR_TABLE[4],
        PairBucket::Six => &PAIR_TABLE[5],
        PairBucket::Seven => &PAIR_TABLE[6],
        PairBucket::Eight => &PAIR_TABLE[7],
        PairBucket::Nine => &PAIR_TABLE[8],
        PairBucket::Ten => &PAIR_TABLE[9],
    }
}

/// Soft totals 13..20 (`A-2` through `A-9`; `A-10` is a natural, never
/// looked up here). Row 0 = soft 20, row 7 = soft 13.
#[rustfmt::skip]
const SOFT_TABLE: [[Cell; DEALER_COLUMNS]; 8] = {
    use Cell::{Hit as H, Stand as S, DoubleOrHit as DH, DoubleOrStand as DS};
    [
        // 2      3   4   5   6   7  8  9  10  A
        [S, S, S, S, S, S, S, S, S, S],    // 20
        [S, S, S, S, DS, S, S, S, S, S],   // 19
        [DS, DS, DS, DS, DS, S, S, H, H, H], // 18
        [H, DH, DH, DH, DH, H, H, H, H, H], // 17
        [H, H, DH, DH, DH, H, H, H, H, H],  // 16
        [H, H, DH, DH, DH, H, H, H, H, H],  // 15
        [H, H, DH, DH, DH, H, H, H, H, H],  // 14
        [H, H, DH, DH, DH, H, H, H, H, H],  // 13
    ]
};

/// Hard totals 5..20. Row 0 = hard 20, row 15 = hard 5.
#[rustfmt::skip]
const HARD_TABLE: [[Cell; DEALER_COLUMNS]; 16] = {
    use Cell::{Hit as H, Stand as S, Double as D, SurrenderOrHit as RH, SurrenderOrStand as RS};
    [
        // 2      3   4   5   6   7  8  9  10   A
        [S, S, S, S, S, S, S, S, S, S],       // 20
        [S, S, S, S, S, S, S, S, S, S],       // 19
        [S, S, S, S, S, S, S, S, S, S],       // 18
        [S, S, S, S, S, S, S, S, S, RS],      // 17
        [S, S, S, S, S, H, H, RH, RH, RH],    // 16
        [S, S, S, S, S, H, H, H, RH, RH],     // 15
        [S, S, S, S, S, H, H, H, H, H],       // 14
        [S, S, S, S, S, H, H, H, H, H],       // 13
        [H, H, S, S, S, H, H, H, H, H],       // 12
        [D, D, D, D, D, D, D, D, D, D],       // 11
        [D, D, D, D, D, D, D, D, H, H],       // 10
        [H, D, D, D, D, H, H, H, H, H],       // 9
        [H, H, H, H, H, H, H, H, H, H],       // 8
        [H, H, H, H, H, H, H, H, H, H],       // 7
        [H, H, H, H, H, H, H, H, H, H],       // 6
        [H, H, H, H, H, H, H, H, H, H],       // 5
    ]
};

/// A small true-count-triggered override table (Illustrious-style). Applied
/// after the basic-strategy lookup, only when `deviations` is enabled on
/// [`recommend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandKey {
    Hard(u8),
    Soft(u8),
    Pair(PairBucket),
}

struct DeviationEntry {
    key: HandKey,
    dealer: Rank,
    threshold_tc: i32,
    action: Action,
}

/// Roughly the top of the Illustrious 18, keyed exactly as the basic tables
/// above (dealer Ace = column 9, i.e. rank `Ace`).
const DEVIATIONS: &[DeviationEntry] = &[
    DeviationEntry { key: HandKey::Hard(16), dealer: Rank::Ten, threshold_tc: 0, action: Action::Stand },
    DeviationEntry { key: HandKey::Hard(15), dealer: Rank::Ten, threshold_tc: 4, action: Action::Stand },
    DeviationEntry { key: HandKey::Hard(12), dealer: Rank::Three, threshold_tc: 2, action: Action::Stand },
    DeviationEntry { key: HandKey::Hard(12), dealer: Rank::Two, threshold_tc: 3, action: Action::Stand },
    DeviationEntry { key: HandKey::Hard(12), dealer: Rank::Four, threshold_tc: -1, action: Action::Stand },
    DeviationEntry { key: HandKey::Hard(11), dealer: Rank::Ace, threshold_tc: 1, action: Action::Double },
    DeviationEntry { key: HandKey::Hard(10), dealer: Rank::Ten, threshold_tc: 4, action: Action::Double },
    DeviationEntry { key: HandKey::Hard(10), dealer: Rank::Ace, threshold_tc: 4, action: Action::Double },
    DeviationEntry { key: HandKey::Hard(9), dealer: Rank::Two, threshold_tc: 1, action: Action::Double },
    DeviationEntry { key: HandKey::Hard(9), dealer: Rank::Seven, threshold_tc: 3, action: Action::Double },
    DeviationEntry { key: HandKey::Hard(13), dealer: Rank::Two, threshold_tc: -1, action: Action::Hit },
    DeviationEntry { key: HandKey::Hard(14), dealer: Rank::Ten, threshold_tc: 5, action: Action::Stand },
    DeviationEntry { key: HandKey::Pair(PairBucket::Ten), dealer: Rank::Five, threshold_tc: 5, action: Action::Split },
    DeviationEntry { key: HandKey::Pair(PairBucket::Ten), dealer: Rank::Six, threshold_tc: 4, action: Action::Split },
];

/// True-count threshold at which insurance becomes a positive-EV side bet,
/// checked only when the dealer upcard is an Ace.
const INSURANCE_THRESHOLD_TC: f64 = 3.0;

/// A complete basic-strategy recommendation for one decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// The recommended action.
    pub action: Action,
    /// Whether a deviation overlay changed the basic-strategy answer.
    pub deviated: bool,
}

/// Recommends an action for `player_cards` against `dealer_upcard`.
///
/// Lookup order (§4.4): pairs (if `caps.can_split` and the hand is exactly
/// two cards of matching rank, or matching base value when
/// `allow_split_by_value` is set), then soft totals, then hard totals.
/// Hands of more than two cards never consult the pairs table. Totals
/// outside the tabulated range default to stand-on-17-else-hit.
///
/// When `deviations` is true, the basic answer is then checked against the
/// true-count overlay and replaced if the threshold is met.
#[must_use]
pub fn recommend(
    player_cards: &[Card],
    dealer_upcard: Card,
    caps: Capabilities,
    allow_split_by_value: bool,
    deviations: bool,
    true_count: f64,
) -> Recommendation {
    if is_blackjack(player_cards) {
        return Recommendation { action: Action::Stand, deviated: false };
    }

    let (total, soft) = best_total_and_soft(player_cards);
    let column = dealer_column(dealer_upcard.rank);

    let is_pair = player_cards.len() == 2
        && (player_cards[0].rank == player_cards[1].rank
            || (allow_split_by_value
                && player_cards[0].base_value() == player_cards[1].base_value()));

    let pair_key = if caps.can_split && is_pair {
        Some(pair_bucket(player_cards[0].rank))
    } else {
        None
    };

    let basic = if let Some(bucket) = pair_key {
        pair_row(bucket)[column].resolve(caps)
    } else if soft {
        soft_cell(total, column).unwrap_or_else(|| default_cell(total)).resolve(caps)
    } else {
        hard_cell(total, column).unwrap_or_else(|| default_cell(total)).resolve(caps)
    };

    if !deviations {
        return Recommendation { action: basic, deviated: false };
    }

    let hand_key = pair_key.map_or_else(
        || if soft { HandKey::Soft(total) } else { HandKey::Hard(total) },
        HandKey::Pair,
    );

    for entry in DEVIATIONS {
        if entry.key == hand_key
            && entry.dealer == dealer_upcard.rank
            && true_count >= f64::from(entry.threshold_tc)
        {
            return Recommendation { action: entry.action, deviated: true };
        }
    }

    Recommendation { action: basic, deviated: false }
}

const fn default_cell(total: u8) -> Cell {
    if total >= 17 { Cell::Stand } else { Cell::Hit }
}

fn soft_cell(total: u8, column: usize) -> Option<Cell> {
    if !(13..=20).contains(&total) {
        return None;
    }
    let row = usize::from(20 - total);
    Some(SOFT_TABLE[row][column])
}

fn hard_cell(total: u8, column: usize) -> Option<Cell> {
    if !(5..=20).contains(&total) {
        return None;
    }
    let row = usize::from(20 - total);
    Some(HARD_TABLE[row][column])
}

/// Whether the deviation overlay recommends taking insurance at the given
/// true count. Only meaningful when the dealer upcard is an Ace.
#[must_use]
pub fn should_take_insurance(true_count: f64) -> bool {
    true_count >= INSURANCE_THRESHOLD_TC
}
