//! Card types: suit, rank, and the value/count facets a card exposes.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in a fixed order used to build a fresh deck.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// The single-character glyph used in the card string form (§6).
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card rank.
///
/// Kept as a closed enum rather than a raw integer or string so that every
/// match over ranks is exhaustive and the compiler rejects out-of-range
/// values outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack (base value 10).
    Jack,
    /// Queen (base value 10).
    Queen,
    /// King (base value 10).
    King,
    /// Ace (base value 11).
    Ace,
}

impl Rank {
    /// All thirteen ranks, in a fixed order used to build a fresh deck.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Blackjack base value: face value for 2..10, 10 for J/Q/K, 11 for Ace.
    ///
    /// Ace is always 11 here; `Hand::best_total_and_soft` is responsible for
    /// reducing it to 1 when the running total would otherwise bust.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Hi-Lo count contribution: +1 for 2..6, 0 for 7..9, -1 for 10..A.
    #[must_use]
    pub const fn hi_lo_delta(self) -> i32 {
        match self {
            Self::Two | Self::Three | Self::Four | Self::Five | Self::Six => 1,
            Self::Seven | Self::Eight | Self::Nine => 0,
            Self::Ten | Self::Jack | Self::Queen | Self::King | Self::Ace => -1,
        }
    }

    /// The rank glyph used in the card string form (§6): `2`..`9`, `10`,
    /// `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card: an immutable `{rank, suit}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Blackjack base value (see [`Rank::base_value`]).
    #[must_use]
    pub const fn base_value(self) -> u8 {
        self.rank.base_value()
    }

    /// Hi-Lo count contribution (see [`Rank::hi_lo_delta`]).
    #[must_use]
    pub const fn hi_lo_delta(self) -> i32 {
        self.rank.hi_lo_delta()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards in a standard 52-card deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values() {
        assert_eq!(Rank::Two.base_value(), 2);
        assert_eq!(Rank::Ten.base_value(), 10);
        assert_eq!(Rank::Jack.base_value(), 10);
        assert_eq!(Rank::Queen.base_value(), 10);
        assert_eq!(Rank::King.base_value(), 10);
        assert_eq!(Rank::Ace.base_value(), 11);
    }

    #[test]
    fn hi_lo_deltas() {
        for rank in [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
        ] {
            assert_eq!(rank.hi_lo_delta(), 1, "{rank:?}");
        }
        for rank in [Rank::Seven, Rank::Eight, Rank::Nine] {
            assert_eq!(rank.hi_lo_delta(), 0, "{rank:?}");
        }
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
            assert_eq!(rank.hi_lo_delta(), -1, "{rank:?}");
        }
    }

    #[test]
    fn display_form() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(card.to_string(), "A♠");
        let ten = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(ten.to_string(), "10♥");
    }

    #[test]
    fn all_arrays_cover_the_full_deck() {
        assert_eq!(Suit::ALL.len(), 4);
        assert_eq!(Rank::ALL.len(), 13);
    }
}
