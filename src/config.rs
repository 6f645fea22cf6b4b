//! Validated, immutable configuration for the Round Engine and the
//! Counting Trainer.
//!
//! Builders keep the teacher's `with_x(self, ...) -> Self` chain; the
//! difference is that the terminal step is `build()`, which validates
//! every bound and returns [`ConfigError`] instead of accepting anything.

use crate::error::ConfigError;

/// Rule set and table limits for one Round Engine session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    num_decks: u8,
    starting_bankroll: i64,
    min_bet: i64,
    max_bet: i64,
    blackjack_payout: f64,
    dealer_hits_soft_17: bool,
    double_after_split: bool,
    split_aces_one_card_only: bool,
    max_splits: u8,
    insurance_pays: f64,
    penetration: f64,
    allow_split_by_value: bool,
    surrender_enabled: bool,
}

impl GameConfig {
    /// Starts a [`GameConfigBuilder`] with the table defaults (6 decks,
    /// 3:2 blackjack, dealer hits soft 17, DAS on, 3 splits, insurance 2:1,
    /// 75% penetration, same-rank splits only, surrender off).
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Number of decks in the shoe.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Starting bankroll for a fresh session.
    #[must_use]
    pub const fn starting_bankroll(&self) -> i64 {
        self.starting_bankroll
    }

    /// Minimum bet.
    #[must_use]
    pub const fn min_bet(&self) -> i64 {
        self.min_bet
    }

    /// Maximum bet.
    #[must_use]
    pub const fn max_bet(&self) -> i64 {
        self.max_bet
    }

    /// Blackjack payout ratio (e.g. `1.5` for 3:2).
    #[must_use]
    pub const fn blackjack_payout(&self) -> f64 {
        self.blackjack_payout
    }

    /// Whether the dealer hits a soft 17.
    #[must_use]
    pub const fn dealer_hits_soft_17(&self) -> bool {
        self.dealer_hits_soft_17
    }

    /// Whether doubling is allowed on a split child.
    #[must_use]
    pub const fn double_after_split(&self) -> bool {
        self.double_after_split
    }

    /// Whether split aces receive exactly one further card each.
    #[must_use]
    pub const fn split_aces_one_card_only(&self) -> bool {
        self.split_aces_one_card_only
    }

    /// Maximum number of splits per round.
    #[must_use]
    pub const fn max_splits(&self) -> u8 {
        self.max_splits
    }

    /// Insurance payout ratio (e.g. `2.0` for 2:1).
    #[must_use]
    pub const fn insurance_pays(&self) -> f64 {
        self.insurance_pays
    }

    /// Fraction of the shoe dealt before a reshuffle is mandatory.
    #[must_use]
    pub const fn penetration(&self) -> f64 {
        self.penetration
    }

    /// Whether any two 10-valued cards (not just identical ranks) may be
    /// split.
    #[must_use]
    pub const fn allow_split_by_value(&self) -> bool {
        self.allow_split_by_value
    }

    /// Whether surrender is offered at all. §9's open question: the source
    /// disagreed on this across variants, so conformance treats it as
    /// optional and gated here.
    #[must_use]
    pub const fn surrender_enabled(&self) -> bool {
        self.surrender_enabled
    }
}

/// Builder for [`GameConfig`]. See [`GameConfig::builder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfigBuilder {
    num_decks: u8,
    starting_bankroll: i64,
    min_bet: i64,
    max_bet: i64,
    blackjack_payout: f64,
    dealer_hits_soft_17: bool,
    double_after_split: bool,
    split_aces_one_card_only: bool,
    max_splits: u8,
    insurance_pays: f64,
    penetration: f64,
    allow_split_by_value: bool,
    surrender_enabled: bool,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            num_decks: 6,
            starting_bankroll: 1000,
            min_bet: 10,
            max_bet: 500,
            blackjack_payout: 1.5,
            dealer_hits_soft_17: true,
            double_after_split: true,
            split_aces_one_card_only: true,
            max_splits: 3,
            insurance_pays: 2.0,
            penetration: 0.75,
            allow_split_by_value: false,
            surrender_enabled: false,
        }
    }
}

impl GameConfigBuilder {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_num_decks(mut self, num_decks: u8) -> Self {
        self.num_decks = num_decks;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: i64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: i64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: i64) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_payout(mut self, payout: f64) -> Self {
        self.blackjack_payout = payout;
        self
    }

    /// Sets whether the dealer hits a soft 17.
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets whether doubling is allowed on a split child.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether split aces receive exactly one further card each.
    #[must_use]
    pub const fn with_split_aces_one_card_only(mut self, one_card: bool) -> Self {
        self.split_aces_one_card_only = one_card;
        self
    }

    /// Sets the maximum number of splits per round.
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: u8) -> Self {
        self.max_splits = max_splits;
        self
    }

    /// Sets the insurance payout ratio.
    #[must_use]
    pub const fn with_insurance_pays(mut self, pays: f64) -> Self {
        self.insurance_pays = pays;
        self
    }

    /// Sets the shoe penetration fraction.
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets whether any two 10-valued cards may be split.
    #[must_use]
    pub const fn with_allow_split_by_value(mut self, allow: bool) -> Self {
        self.allow_split_by_value = allow;
        self
    }

    /// Sets whether surrender is offered.
    #[must_use]
    pub const fn with_surrender_enabled(mut self, enabled: bool) -> Self {
        self.surrender_enabled = enabled;
        self
    }

    /// Validates every bound and produces an immutable [`GameConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] variant whose bound is violated.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if !(1..=8).contains(&self.num_decks) {
            return Err(ConfigError::NumDecksOutOfRange);
        }
        if self.starting_bankroll <= 0 {
            return Err(ConfigError::NonPositiveBankroll);
        }
        if self.min_bet <= 0 {
            return Err(ConfigError::NonPositiveMinBet);
        }
        if self.max_bet < self.min_bet {
            return Err(ConfigError::MaxBetBelowMinBet);
        }
        if self.blackjack_payout <= 0.0 {
            return Err(ConfigError::NonPositiveBlackjackPayout);
        }
        if self.insurance_pays <= 0.0 {
            return Err(ConfigError::NonPositiveInsurancePays);
        }
        if !(0.1..=1.0).contains(&self.penetration) {
            return Err(ConfigError::PenetrationOutOfRange);
        }

        Ok(GameConfig {
            num_decks: self.num_decks,
            starting_bankroll: self.starting_bankroll,
            min_bet: self.min_bet,
            max_bet: self.max_bet,
            blackjack_payout: self.blackjack_payout,
            dealer_hits_soft_17: self.dealer_hits_soft_17,
            double_after_split: self.double_after_split,
            split_aces_one_card_only: self.split_aces_one_card_only,
            max_splits: self.max_splits,
            insurance_pays: self.insurance_pays,
            penetration: self.penetration,
            allow_split_by_value: self.allow_split_by_value,
            surrender_enabled: self.surrender_enabled,
        })
    }
}

/// What the Counting Trainer deals each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillType {
    /// One card per round.
    SingleCard,
    /// A two-card hand per round.
    Hand,
    /// A full four-card initial deal per round.
    Round,
}

impl DrillType {
    /// The default `cards_per_round` for this drill type: 1, 2, or 4.
    #[must_use]
    pub const fn default_cards_per_round(self) -> u32 {
        match self {
            Self::SingleCard => 1,
            Self::Hand => 2,
            Self::Round => 4,
        }
    }
}

/// Configuration for one Counting Trainer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountingTrainerConfig {
    num_decks: u8,
    drill_type: DrillType,
    cards_per_round: u32,
    ask_true_count: bool,
    time_limit_seconds: Option<u32>,
    show_history: bool,
}

impl CountingTrainerConfig {
    /// Builds a config, defaulting `cards_per_round` from `drill_type` when
    /// `cards_per_round` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NumDecksOutOfRange`] or
    /// [`ConfigError::ZeroCardsPerRound`].
    pub fn new(
        num_decks: u8,
        drill_type: DrillType,
        cards_per_round: Option<u32>,
        ask_true_count: bool,
        time_limit_seconds: Option<u32>,
        show_history: bool,
    ) -> Result<Self, ConfigError> {
        if !(1..=8).contains(&num_decks) {
            return Err(ConfigError::NumDecksOutOfRange);
        }
        let cards_per_round = cards_per_round.unwrap_or_else(|| drill_type.default_cards_per_round());
        if cards_per_round == 0 {
            return Err(ConfigError::ZeroCardsPerRound);
        }

        Ok(Self {
            num_decks,
            drill_type,
            cards_per_round,
            ask_true_count,
            time_limit_seconds,
            show_history,
        })
    }

    /// Number of decks in the trainer's shoe.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// The drill type.
    #[must_use]
    pub const fn drill_type(&self) -> DrillType {
        self.drill_type
    }

    /// Cards dealt per round.
    #[must_use]
    pub const fn cards_per_round(&self) -> u32 {
        self.cards_per_round
    }

    /// Whether the trainer also asks for a true-count guess.
    #[must_use]
    pub const fn ask_true_count(&self) -> bool {
        self.ask_true_count
    }

    /// Optional per-round time limit.
    #[must_use]
    pub const fn time_limit_seconds(&self) -> Option<u32> {
        self.time_limit_seconds
    }

    /// Whether past rounds remain visible to the trainee.
    #[must_use]
    pub const fn show_history(&self) -> bool {
        self.show_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(GameConfig::builder().build().is_ok());
    }

    #[test]
    fn rejects_out_of_range_decks() {
        let err = GameConfig::builder().with_num_decks(0).build().unwrap_err();
        assert_eq!(err, ConfigError::NumDecksOutOfRange);
        let err = GameConfig::builder().with_num_decks(9).build().unwrap_err();
        assert_eq!(err, ConfigError::NumDecksOutOfRange);
    }

    #[test]
    fn rejects_max_bet_below_min_bet() {
        let err = GameConfig::builder()
            .with_min_bet(100)
            .with_max_bet(50)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MaxBetBelowMinBet);
    }

    #[test]
    fn rejects_penetration_out_of_range() {
        let err = GameConfig::builder().with_penetration(0.05).build().unwrap_err();
        assert_eq!(err, ConfigError::PenetrationOutOfRange);
    }

    #[test]
    fn surrender_defaults_off() {
        let config = GameConfig::builder().build().unwrap();
        assert!(!config.surrender_enabled());
    }

    #[test]
    fn trainer_config_defaults_cards_per_round_from_drill_type() {
        let config = CountingTrainerConfig::new(6, DrillType::Hand, None, false, None, true).unwrap();
        assert_eq!(config.cards_per_round(), 2);
    }

    #[test]
    fn trainer_config_rejects_zero_cards_per_round() {
        let err = CountingTrainerConfig::new(6, DrillType::Hand, Some(0), false, None, true).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCardsPerRound);
    }
}
