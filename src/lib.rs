//! A blackjack training and simulation engine.
//!
//! The crate provides a [`RoundEngine`] that drives one table — one
//! bankroll, one shoe, one or more [`Hand`]s once splits occur — through
//! betting, dealing, insurance, player actions, the dealer's turn, and
//! showdown. A separate [`CountingTrainer`] drills Hi-Lo card counting
//! against its own shoe, and [`strategy::recommend`] looks up basic-strategy
//! (with count-deviation overrides) for a given hand and dealer up card.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_engine::{GameConfig, RoundEngine};
//!
//! let config = GameConfig::builder().build().expect("default config is valid");
//! let mut table = RoundEngine::new(config, 42);
//! table.start_round(10);
//! table.deal_initial();
//! ```

pub mod card;
pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod shoe;
pub mod stats;
pub mod strategy;
pub mod trainer;

pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use config::{CountingTrainerConfig, DrillType, GameConfig, GameConfigBuilder};
pub use counter::Counter;
pub use engine::{HandSnapshot, RoundEngine, Snapshot};
pub use error::{ConfigError, ShoeError};
pub use hand::{DealerHand, Hand};
pub use outcome::{Action, GamePhase, Outcome};
pub use shoe::Shoe;
pub use stats::{RoundStats, TrainerStats};
pub use strategy::{Capabilities, Recommendation, recommend, should_take_insurance};
pub use trainer::{CountingTrainer, GuessFeedback};
