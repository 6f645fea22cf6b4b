//! The dealer's turn and final showdown.

use crate::error::ActionError;
use crate::outcome::{GamePhase, Outcome};

use super::RoundEngine;

impl RoundEngine {
    /// Plays out the dealer's hand and settles every still-unresolved hand.
    ///
    /// Reveals the hole card (a no-op if it was already revealed by an
    /// earlier natural or insurance resolution), then draws while the
    /// dealer's total is below 17, or is a soft 17 and
    /// `dealer_hits_soft_17` is set. If every hand was already resolved
    /// before this call, the dealer still draws to its stopping total so the
    /// final table state reflects a complete hand, but no further bankroll
    /// changes occur since there is nothing left unsettled.
    ///
    /// # Errors (via [`RoundEngine::message`])
    ///
    /// Fails outside [`GamePhase::DealerTurn`], or if the shoe is exhausted
    /// (deterministic mode only) mid-draw; any cards drawn before that point
    /// remain committed to the dealer's hand.
    pub fn dealer_turn(&mut self) -> bool {
        if self.phase != GamePhase::DealerTurn {
            self.message = ActionError::WrongPhase.to_string();
            return false;
        }

        self.reveal_hole();

        loop {
            let (total, is_soft) = self.dealer.best_total_and_soft();
            let must_hit = total < 17 || (total == 17 && is_soft && self.config.dealer_hits_soft_17());
            if !must_hit {
                break;
            }
            let Ok(card) = self.shoe.draw() else {
                self.message = ActionError::Exhausted.to_string();
                return false;
            };
            self.dealer.add_card(card);
            self.counter.update(card);
        }

        let dealer_bust = self.dealer.is_bust();
        let dealer_total = self.dealer.total();

        for index in 0..self.hands.len() {
            if self.hands[index].is_resolved() {
                continue;
            }
            let outcome = if dealer_bust {
                Outcome::Win
            } else {
                let player_total = self.hands[index].total();
                match player_total.cmp(&dealer_total) {
                    std::cmp::Ordering::Greater => Outcome::Win,
                    std::cmp::Ordering::Equal => Outcome::Push,
                    std::cmp::Ordering::Less => Outcome::Lose,
                }
            };
            self.settle_hand(index, outcome);
        }

        self.phase = GamePhase::RoundOver;
        self.message.clear();
        true
    }
}
