//! The Round Engine: a single-table, single-bankroll blackjack state machine.
//!
//! Generalizes the teacher's multi-player `Game` (`HashMap<PlayerId, _>`
//! state behind `Mutex`) down to one bankroll and one table, driven
//! exclusively by `&mut self`. Splits are the only source of more than one
//! [`Hand`] at a time; there is no player identity layer at all.

mod actions;
mod bet;
mod dealer;
mod insurance;
mod state;

pub use state::{HandSnapshot, Snapshot};

use crate::config::GameConfig;
use crate::counter::Counter;
use crate::hand::{DealerHand, Hand};
use crate::outcome::{GamePhase, Outcome};
use crate::shoe::Shoe;
use crate::stats::RoundStats;

/// Drives one blackjack table from bet to next bet.
///
/// Owns its [`Shoe`] and [`Counter`] outright (§5: no `Mutex`, no `Arc`, no
/// shared mutable state). Every public method returns `bool`; the reason for
/// a `false` is available afterward via [`RoundEngine::message`].
#[derive(Debug)]
pub struct RoundEngine {
    config: GameConfig,
    shoe: Shoe,
    counter: Counter,
    bankroll: i64,
    phase: GamePhase,
    hands: Vec<Hand>,
    dealer: DealerHand,
    active_hand_index: usize,
    current_bet: i64,
    insurance_bet: i64,
    split_count: u8,
    stats: RoundStats,
    next_hand_id: u32,
    message: String,
}

impl RoundEngine {
    /// Starts a fresh session with a freshly shuffled, seeded random shoe.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let shoe = Shoe::new(config.num_decks(), config.penetration(), seed);
        Self::new_with_shoe(config, shoe)
    }

    /// Starts a fresh session with a caller-supplied shoe.
    ///
    /// The ambient test seam for the six literal end-to-end scenarios: pass
    /// a [`Shoe::new_deterministic`] shoe to exercise exact draw sequences
    /// through the public API, never by poking a private field.
    #[must_use]
    pub fn new_with_shoe(config: GameConfig, shoe: Shoe) -> Self {
        let starting_bankroll = config.starting_bankroll();
        Self {
            config,
            shoe,
            counter: Counter::new(),
            bankroll: starting_bankroll,
            phase: GamePhase::Betting,
            hands: Vec::new(),
            dealer: DealerHand::new(),
            active_hand_index: 0,
            current_bet: 0,
            insurance_bet: 0,
            split_count: 0,
            stats: RoundStats::new(starting_bankroll),
            next_hand_id: 0,
            message: String::new(),
        }
    }

    /// Resets the whole session: a fresh shoe, bankroll back to
    /// `starting_bankroll`, stats zeroed, and hand IDs restarting from zero.
    ///
    /// Distinct from [`RoundEngine::new`]/[`RoundEngine::new_with_shoe`] in
    /// that it reuses the existing `config` rather than taking a new one —
    /// grounded in the original source's `GameEngine.new_session()`, which
    /// rebuilds the shoe and `TableState` on an already-constructed engine
    /// rather than requiring the caller to discard and recreate it. Callable
    /// from any phase; mid-round state is simply discarded.
    pub fn new_session(&mut self, seed: u64) {
        let starting_bankroll = self.config.starting_bankroll();
        self.shoe = Shoe::new(self.config.num_decks(), self.config.penetration(), seed);
        self.counter = Counter::new();
        self.bankroll = starting_bankroll;
        self.phase = GamePhase::Betting;
        self.hands.clear();
        self.dealer.clear();
        self.active_hand_index = 0;
        self.current_bet = 0;
        self.insurance_bet = 0;
        self.split_count = 0;
        self.stats = RoundStats::new(starting_bankroll);
        self.next_hand_id = 0;
        self.message.clear();
    }

    fn allocate_hand_id(&mut self) -> u32 {
        let id = self.next_hand_id;
        self.next_hand_id += 1;
        id
    }

    /// Reveals the dealer's hole card and folds it into the running count,
    /// exactly once.
    ///
    /// Idempotent: a no-op if the hole card is already revealed. Three
    /// mutually exclusive call sites exist across a round (the no-Ace-upcard
    /// natural-resolution branch of [`RoundEngine::deal_initial`], the
    /// unconditional reveal at the top of [`RoundEngine::take_insurance`]
    /// once the accept/decline decision is recorded, and the entry to
    /// [`RoundEngine::dealer_turn`]) — at most one of them ever fires for a
    /// given round, but the guard keeps the hole card from ever being
    /// counted twice regardless.
    fn reveal_hole(&mut self) {
        if self.dealer.is_hole_revealed() {
            return;
        }
        self.dealer.reveal_hole();
        if let Some(&hole) = self.dealer.cards().get(1) {
            self.counter.update(hole);
        }
    }

    fn payout_for(&self, outcome: Outcome, bet: i64) -> i64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "bet sizes are small enough for f64 to represent exactly"
        )]
        let bet_f = bet as f64;
        match outcome {
            Outcome::Blackjack => {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "payout ratios and bets are both positive and bounded"
                )]
                let bonus = (bet_f * self.config.blackjack_payout()).floor() as i64;
                bet + bonus
            }
            Outcome::Win => bet * 2,
            Outcome::Push => bet,
            Outcome::Lose | Outcome::Bust | Outcome::Surrendered => 0,
        }
    }

    /// Assigns a terminal outcome to `hands[index]`, credits the payout to
    /// the bankroll, and records it in [`RoundStats`]. The one path every
    /// hand resolution funnels through, so bankroll conservation only needs
    /// checking here.
    fn settle_hand(&mut self, index: usize, outcome: Outcome) {
        let bet = self.hands[index].bet();
        let is_doubled = self.hands[index].is_doubled();
        let payout = self.payout_for(outcome, bet);
        self.bankroll += payout;
        self.hands[index].resolve(outcome);
        self.stats.record_hand(outcome, bet, payout - bet, is_doubled);
        self.stats.record_bankroll(self.bankroll);
    }

    /// Moves to the next still-active hand, or to [`GamePhase::DealerTurn`]
    /// once none remain.
    fn advance_after_hand(&mut self) {
        loop {
            self.active_hand_index += 1;
            match self.hands.get(self.active_hand_index) {
                Some(hand) if hand.is_active() => return,
                Some(_) => continue,
                None => {
                    self.phase = GamePhase::DealerTurn;
                    return;
                }
            }
        }
    }

    /// Current rule set and table limits.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> i64 {
        self.bankroll
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The hand awaiting a player decision, if any.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active_hand_index)
    }

    /// All hands in the current round, in split order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Running Hi-Lo count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.counter.running_count()
    }

    /// True count, estimated from the shoe's remaining decks.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.counter.true_count(self.shoe.decks_remaining())
    }

    /// Cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Aggregate statistics for this session.
    #[must_use]
    pub const fn stats(&self) -> &RoundStats {
        &self.stats
    }

    /// Explanation for the most recent `false` return, if any. Cleared on
    /// every transition that succeeds.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// A read-only view of the full table state (§3 "Table state").
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        state::build_snapshot(self)
    }
}
