//! The insurance decision offered when the dealer's up card is an Ace.

use crate::error::ActionError;
use crate::outcome::{GamePhase, Outcome};

use super::RoundEngine;

impl RoundEngine {
    /// Accepts or declines insurance.
    ///
    /// Insurance costs half the current bet. Either way, the dealer's hole
    /// card is revealed immediately once the accept/decline decision is
    /// recorded — the dealer has to look regardless of whether anyone took
    /// the side bet. If the dealer has a natural, insurance (if taken) pays
    /// `insurance_pays` to 1, and every hand is resolved immediately
    /// (`Push` against a player natural, `Lose` otherwise). Otherwise the
    /// insurance bet (if any) is forfeited and the round proceeds to
    /// [`GamePhase::PlayerTurn`], resolving an immediate player natural as
    /// `Blackjack` along the way.
    ///
    /// # Errors (via [`RoundEngine::message`])
    ///
    /// Fails outside [`GamePhase::InsuranceOffer`], or if `yes` is true and
    /// the bankroll cannot cover half the current bet.
    pub fn take_insurance(&mut self, yes: bool) -> bool {
        if self.phase != GamePhase::InsuranceOffer {
            self.message = ActionError::WrongPhase.to_string();
            return false;
        }

        if yes {
            let cost = self.current_bet / 2;
            if self.bankroll < cost {
                self.message = ActionError::InsufficientBankroll.to_string();
                return false;
            }
            self.bankroll -= cost;
            self.insurance_bet = cost;
        } else {
            self.insurance_bet = 0;
        }

        self.reveal_hole();

        if self.dealer.is_blackjack() {
            if self.insurance_bet > 0 {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "insurance bets are small enough for f64 to represent exactly"
                )]
                let bet_f = self.insurance_bet as f64;
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "payout ratios and bets are both positive and bounded"
                )]
                let bonus = (bet_f * self.config.insurance_pays()).floor() as i64;
                self.bankroll += self.insurance_bet + bonus;
                self.stats.record_insurance(true);
            }

            for index in 0..self.hands.len() {
                let outcome = if self.hands[index].is_blackjack() {
                    Outcome::Push
                } else {
                    Outcome::Lose
                };
                self.settle_hand(index, outcome);
            }
            self.phase = GamePhase::RoundOver;
        } else {
            if self.insurance_bet > 0 {
                self.stats.record_insurance(false);
            }

            if self.hands[0].is_blackjack() {
                self.settle_hand(0, Outcome::Blackjack);
                self.phase = GamePhase::RoundOver;
            } else {
                self.active_hand_index = 0;
                self.phase = GamePhase::PlayerTurn;
            }
        }

        self.message.clear();
        true
    }
}
