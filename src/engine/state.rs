//! Read-only snapshots of the table state (§3).

use crate::card::Card;
use crate::outcome::{GamePhase, Outcome};

use super::RoundEngine;

/// A read-only view of one [`crate::hand::Hand`].
#[derive(Debug, Clone, PartialEq)]
pub struct HandSnapshot {
    /// Stable hand ID, stable across splits.
    pub id: u32,
    /// Cards dealt to this hand so far.
    pub cards: Vec<Card>,
    /// Best total, Ace reduced as needed.
    pub total: u8,
    /// Whether at least one Ace is still counted as 11.
    pub is_soft: bool,
    /// Current bet staked on this hand.
    pub bet: i64,
    /// Whether this hand has been doubled down.
    pub is_doubled: bool,
    /// Whether this hand was created by a split.
    pub is_split_child: bool,
    /// Whether the hand is still eligible for player actions.
    pub is_active: bool,
    /// Whether the hand has a terminal outcome.
    pub is_resolved: bool,
    /// The terminal outcome, if assigned.
    pub outcome: Option<Outcome>,
}

/// A read-only view of the entire table.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: GamePhase,
    /// Current bankroll.
    pub bankroll: i64,
    /// The bet placed for the round in progress (0 outside a round).
    pub current_bet: i64,
    /// Every hand in the round, in split order.
    pub hands: Vec<HandSnapshot>,
    /// Index into `hands` awaiting a player decision.
    pub active_hand_index: usize,
    /// The dealer's visible cards: just the up card before the hole card is
    /// revealed, both cards after.
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer's hole card has been revealed.
    pub dealer_hole_revealed: bool,
    /// Insurance bet placed this round (0 if none).
    pub insurance_bet: i64,
    /// Splits performed so far this round.
    pub split_count: u8,
    /// Running Hi-Lo count.
    pub running_count: i32,
    /// True count, estimated from the shoe's remaining decks.
    pub true_count: f64,
    /// Estimated decks remaining in the shoe.
    pub decks_remaining: f64,
    /// Explanation for the most recent failed transition, if any.
    pub message: String,
}

pub(super) fn build_snapshot(engine: &RoundEngine) -> Snapshot {
    let hands = engine
        .hands
        .iter()
        .map(|hand| {
            let (total, is_soft) = hand.best_total_and_soft();
            HandSnapshot {
                id: hand.id(),
                cards: hand.cards().to_vec(),
                total,
                is_soft,
                bet: hand.bet(),
                is_doubled: hand.is_doubled(),
                is_split_child: hand.is_split_child(),
                is_active: hand.is_active(),
                is_resolved: hand.is_resolved(),
                outcome: hand.outcome(),
            }
        })
        .collect();

    let dealer_cards = if engine.dealer.is_hole_revealed() {
        engine.dealer.cards().to_vec()
    } else {
        engine.dealer.up_card().into_iter().collect()
    };

    Snapshot {
        phase: engine.phase,
        bankroll: engine.bankroll,
        current_bet: engine.current_bet,
        hands,
        active_hand_index: engine.active_hand_index,
        dealer_cards,
        dealer_hole_revealed: engine.dealer.is_hole_revealed(),
        insurance_bet: engine.insurance_bet,
        split_count: engine.split_count,
        running_count: engine.counter.running_count(),
        true_count: engine.true_count(),
        decks_remaining: engine.shoe.decks_remaining(),
        message: engine.message.clone(),
    }
}
