//! Starting a round and dealing the initial four cards.

use crate::card::Rank;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::outcome::{GamePhase, Outcome};

use super::RoundEngine;

impl RoundEngine {
    /// Places `bet` and moves to [`GamePhase::Dealing`].
    ///
    /// # Errors (via [`RoundEngine::message`])
    ///
    /// Fails outside [`GamePhase::Betting`] — call
    /// [`RoundEngine::next_round`] first to return here from
    /// [`GamePhase::RoundOver`] — or if `bet` falls outside
    /// `[min_bet, max_bet]` or exceeds the bankroll.
    pub fn start_round(&mut self, bet: i64) -> bool {
        if self.phase != GamePhase::Betting {
            self.message = ActionError::WrongPhase.to_string();
            return false;
        }

        if bet < self.config.min_bet() || bet > self.config.max_bet() || bet > self.bankroll {
            self.message = ActionError::InvalidBet.to_string();
            return false;
        }

        if self.shoe.needs_reshuffle() {
            self.shoe.rebuild_and_shuffle();
            self.counter.reset();
        }

        self.current_bet = bet;
        self.bankroll -= bet;

        let id = self.allocate_hand_id();
        self.hands.push(Hand::new(id, bet));
        self.phase = GamePhase::Dealing;
        self.message.clear();
        true
    }

    /// Clears the table after a finished round and returns to
    /// [`GamePhase::Betting`] so [`RoundEngine::start_round`] can be called
    /// again.
    ///
    /// # Errors (via [`RoundEngine::message`])
    ///
    /// Fails outside [`GamePhase::RoundOver`], leaving the table untouched.
    pub fn next_round(&mut self) -> bool {
        if self.phase != GamePhase::RoundOver {
            self.message = ActionError::WrongPhase.to_string();
            return false;
        }

        self.hands.clear();
        self.dealer.clear();
        self.active_hand_index = 0;
        self.current_bet = 0;
        self.insurance_bet = 0;
        self.split_count = 0;
        self.phase = GamePhase::Betting;
        self.message.clear();
        true
    }

    /// Deals player, dealer-up, player, dealer-hole in that order, folding
    /// the three visible cards (not the hole card) into the running count.
    ///
    /// Resolves the round immediately when either a dealer natural (up card
    /// not an Ace, hole card an Ace or ten-value completing 21) or a player
    /// natural occurs; otherwise transitions to [`GamePhase::InsuranceOffer`]
    /// when the up card is an Ace, or to [`GamePhase::PlayerTurn`].
    ///
    /// # Errors (via [`RoundEngine::message`])
    ///
    /// Fails outside [`GamePhase::Dealing`], or if the shoe is exhausted
    /// (deterministic mode only) before all four cards are drawn.
    pub fn deal_initial(&mut self) -> bool {
        if self.phase != GamePhase::Dealing {
            self.message = ActionError::WrongPhase.to_string();
            return false;
        }

        let Ok(p1) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };
        let Ok(dealer_up) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };
        let Ok(p2) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };
        let Ok(dealer_hole) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };

        self.hands[0].add_card(p1);
        self.dealer.add_card(dealer_up);
        self.hands[0].add_card(p2);
        self.dealer.add_card(dealer_hole);

        self.counter.update(p1);
        self.counter.update(dealer_up);
        self.counter.update(p2);

        if dealer_up.rank == Rank::Ace {
            self.phase = GamePhase::InsuranceOffer;
        } else if self.dealer.is_blackjack() {
            self.reveal_hole();
            let outcome = if self.hands[0].is_blackjack() {
                Outcome::Push
            } else {
                Outcome::Lose
            };
            self.settle_hand(0, outcome);
            self.phase = GamePhase::RoundOver;
        } else if self.hands[0].is_blackjack() {
            self.reveal_hole();
            self.settle_hand(0, Outcome::Blackjack);
            self.phase = GamePhase::RoundOver;
        } else {
            self.active_hand_index = 0;
            self.phase = GamePhase::PlayerTurn;
        }

        self.message.clear();
        true
    }
}
