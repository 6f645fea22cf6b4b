//! Player actions during `PLAYER_TURN`.

use crate::card::Rank;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::outcome::{Action, GamePhase, Outcome};

use super::RoundEngine;

impl RoundEngine {
    /// The actions available on the active hand right now.
    ///
    /// Empty outside [`GamePhase::PlayerTurn`] or when there is no active
    /// hand. `Double` and `Split` are gated on the bankroll covering the
    /// additional stake; `Split` is additionally gated on
    /// `allow_split_by_value`, `max_splits`, and the standard no-resplitting-
    /// aces rule; `Surrender` is gated on `surrender_enabled` and never
    /// offered on a split hand.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        if self.phase != GamePhase::PlayerTurn {
            return Vec::new();
        }
        let Some(hand) = self.hands.get(self.active_hand_index) else {
            return Vec::new();
        };
        if !hand.is_active() {
            return Vec::new();
        }

        let mut actions = vec![Action::Hit, Action::Stand];
        let two_cards = hand.cards().len() == 2;
        let can_afford = self.bankroll >= hand.bet();

        if two_cards
            && can_afford
            && (!hand.is_split_child() || self.config.double_after_split())
        {
            actions.push(Action::Double);
        }

        let is_ace_pair = two_cards && hand.cards()[0].rank == Rank::Ace;
        if two_cards
            && can_afford
            && hand.can_split(self.config.allow_split_by_value())
            && self.split_count < self.config.max_splits()
            && !(is_ace_pair && hand.is_split_child())
        {
            actions.push(Action::Split);
        }

        if two_cards && !hand.is_split_child() && self.config.surrender_enabled() {
            actions.push(Action::Surrender);
        }

        actions
    }

    /// Applies `action` to the active hand.
    ///
    /// # Errors (via [`RoundEngine::message`])
    ///
    /// Fails if `action` is not in [`RoundEngine::available_actions`] for
    /// the current hand, or if the shoe is exhausted (deterministic mode
    /// only) while drawing a required card.
    pub fn act(&mut self, action: Action) -> bool {
        match action {
            Action::Hit => self.act_hit(),
            Action::Stand => self.act_stand(),
            Action::Double => self.act_double(),
            Action::Split => self.act_split(),
            Action::Surrender => self.act_surrender(),
        }
    }

    fn require_active_hand(&mut self) -> Option<usize> {
        if self.phase != GamePhase::PlayerTurn {
            self.message = ActionError::WrongPhase.to_string();
            return None;
        }
        match self.hands.get(self.active_hand_index) {
            Some(hand) if hand.is_active() => Some(self.active_hand_index),
            _ => {
                self.message = ActionError::NoActiveHand.to_string();
                None
            }
        }
    }

    fn act_hit(&mut self) -> bool {
        let Some(index) = self.require_active_hand() else {
            return false;
        };
        let Ok(card) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };
        self.hands[index].add_card(card);
        self.counter.update(card);

        if self.hands[index].is_bust() {
            self.settle_hand(index, Outcome::Bust);
            self.advance_after_hand();
        }

        self.message.clear();
        true
    }

    fn act_stand(&mut self) -> bool {
        let Some(index) = self.require_active_hand() else {
            return false;
        };
        self.hands[index].deactivate();
        self.advance_after_hand();
        self.message.clear();
        true
    }

    fn act_double(&mut self) -> bool {
        let Some(index) = self.require_active_hand() else {
            return false;
        };

        let hand = &self.hands[index];
        if hand.cards().len() != 2 {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }
        if hand.is_split_child() && !self.config.double_after_split() {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }
        let bet = hand.bet();
        if self.bankroll < bet {
            self.message = ActionError::InsufficientBankroll.to_string();
            return false;
        }

        let Ok(card) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };

        self.bankroll -= bet;
        self.hands[index].double_bet();
        self.hands[index].add_card(card);
        self.counter.update(card);

        if self.hands[index].is_bust() {
            self.settle_hand(index, Outcome::Bust);
        } else {
            self.hands[index].deactivate();
        }
        self.advance_after_hand();
        self.message.clear();
        true
    }

    fn act_split(&mut self) -> bool {
        let Some(index) = self.require_active_hand() else {
            return false;
        };

        let hand = &self.hands[index];
        if hand.cards().len() != 2 || !hand.can_split(self.config.allow_split_by_value()) {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }
        if self.split_count >= self.config.max_splits() {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }
        let is_ace_pair = hand.cards()[0].rank == Rank::Ace;
        if is_ace_pair && hand.is_split_child() {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }
        let bet = hand.bet();
        if self.bankroll < bet {
            self.message = ActionError::InsufficientBankroll.to_string();
            return false;
        }

        let Ok(card_for_original) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };
        let Ok(card_for_new) = self.shoe.draw() else {
            self.message = ActionError::Exhausted.to_string();
            return false;
        };

        self.bankroll -= bet;
        self.split_count += 1;

        let split_card = self.hands[index]
            .take_split_card()
            .expect("can_split() was verified above");
        self.hands[index].mark_split_child();

        let new_id = self.allocate_hand_id();
        let mut new_hand = Hand::from_split(new_id, split_card, bet);

        self.hands[index].add_card(card_for_original);
        new_hand.add_card(card_for_new);
        self.counter.update(card_for_original);
        self.counter.update(card_for_new);
        self.stats.record_split();

        let auto_stand = is_ace_pair && self.config.split_aces_one_card_only();
        if auto_stand {
            self.hands[index].deactivate();
            new_hand.deactivate();
        }

        self.hands.insert(index + 1, new_hand);

        if auto_stand {
            self.advance_after_hand();
        }

        self.message.clear();
        true
    }

    fn act_surrender(&mut self) -> bool {
        if !self.config.surrender_enabled() {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }
        let Some(index) = self.require_active_hand() else {
            return false;
        };

        let hand = &self.hands[index];
        if hand.cards().len() != 2 || hand.is_split_child() {
            self.message = ActionError::HandNotEligible.to_string();
            return false;
        }

        let bet = hand.bet();
        let refund = bet / 2;
        self.bankroll += refund;
        self.hands[index].resolve(Outcome::Surrendered);
        self.stats
            .record_hand(Outcome::Surrendered, bet, refund - bet, false);
        self.stats.record_bankroll(self.bankroll);

        self.advance_after_hand();
        self.message.clear();
        true
    }
}
