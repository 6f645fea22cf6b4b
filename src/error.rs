//! Error types.
//!
//! [`ConfigError`] is the one fatal kind (§4.8 `InvalidConfig`): it is
//! returned from [`crate::config::GameConfig::new`] and
//! [`crate::config::CountingTrainerConfig::new`] and rejects construction
//! outright. Every other error kind (`InvalidBet`, `InvalidAction`,
//! `PhaseViolation`) is recoverable and, per §7's policy, never escalates
//! past a `bool` return plus a `message` on the snapshot — [`ActionError`]
//! exists so the engine can compute that message and so tests can assert on
//! the precise reason, but it is not part of the public return type of any
//! Round Engine method.

use thiserror::Error;

/// Construction-time configuration errors (`InvalidConfig`, §4.8). Fatal to
/// the builder, never to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `num_decks` outside `[1, 8]`.
    #[error("num_decks must be in 1..=8")]
    NumDecksOutOfRange,
    /// `starting_bankroll` not positive.
    #[error("starting_bankroll must be > 0")]
    NonPositiveBankroll,
    /// `min_bet` not positive.
    #[error("min_bet must be > 0")]
    NonPositiveMinBet,
    /// `max_bet` below `min_bet`.
    #[error("max_bet must be >= min_bet")]
    MaxBetBelowMinBet,
    /// `blackjack_payout` not positive.
    #[error("blackjack_payout must be > 0")]
    NonPositiveBlackjackPayout,
    /// `insurance_pays` not positive.
    #[error("insurance_pays must be > 0")]
    NonPositiveInsurancePays,
    /// `penetration` outside `[0.1, 1.0]`.
    #[error("penetration must be in 0.1..=1.0")]
    PenetrationOutOfRange,
    /// `cards_per_round` is zero.
    #[error("cards_per_round must be >= 1")]
    ZeroCardsPerRound,
}

/// Internal reasons a player action can be refused in the current phase or
/// for the active hand. Collapsed into `message` text at the public surface
/// (§7), never returned directly from a Round Engine method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The engine is not in the phase this operation requires.
    #[error("not available in the current phase")]
    WrongPhase,
    /// There is no active hand to act on.
    #[error("no active hand")]
    NoActiveHand,
    /// The active hand is not eligible for the requested action.
    #[error("action not available for this hand")]
    HandNotEligible,
    /// The bankroll cannot cover the stake the action requires.
    #[error("insufficient bankroll")]
    InsufficientBankroll,
    /// The bet amount fails validation (not an integer in range, or exceeds
    /// the bankroll).
    #[error("invalid bet amount")]
    InvalidBet,
    /// The shoe ran out of cards in deterministic (test) mode.
    #[error("shoe exhausted")]
    Exhausted,
}

/// Errors drawing from a [`crate::shoe::Shoe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A deterministic shoe ran out of preset cards. A random shoe never
    /// produces this error; it rebuilds and reshuffles instead.
    #[error("shoe exhausted")]
    Exhausted,
}
