//! Outcome and phase tags shared by the Round Engine, Hand, and Stats.

use core::fmt;

/// The terminal result of a single hand.
///
/// §4.5's Resolution step produces exactly the first five variants
/// (`Blackjack`, `Win`, `Push`, `Lose`, `Bust`). `Surrendered` is assigned
/// earlier, directly by the surrender action, since a surrendered hand never
/// reaches dealer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Two-card 21 that did not arise from a split; pays `blackjack_payout`.
    Blackjack,
    /// Player total beats the dealer's (or the dealer busted).
    Win,
    /// Player and dealer totals tie.
    Push,
    /// Dealer total beats the player's.
    Lose,
    /// Player total exceeded 21.
    Bust,
    /// Player surrendered; half the bet is refunded immediately.
    Surrendered,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Blackjack => "blackjack",
            Self::Win => "win",
            Self::Push => "push",
            Self::Lose => "lose",
            Self::Bust => "bust",
            Self::Surrendered => "surrendered",
        };
        write!(f, "{label}")
    }
}

/// A player action requested during `PLAYER_TURN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card onto the active hand.
    Hit,
    /// End the active hand's turn without drawing.
    Stand,
    /// Double the stake, draw exactly one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit the hand for half the stake back.
    Surrender,
}

/// The Round Engine's phase, per the §4.5 state diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting a bet for the next round.
    Betting,
    /// Dealing the initial four cards.
    Dealing,
    /// Dealer shows an Ace; waiting on the insurance decision.
    InsuranceOffer,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round resolved; results are available until `next_round`.
    RoundOver,
}
