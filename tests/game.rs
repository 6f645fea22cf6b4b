//! Round Engine and Counting Trainer integration tests: the literal
//! end-to-end scenarios plus the suite-wide invariants.

use blackjack_engine::card::{Rank, Suit};
use blackjack_engine::{
    Action, Card, Capabilities, CountingTrainer, CountingTrainerConfig, DrillType, GameConfig,
    GamePhase, Outcome, RoundEngine, Shoe, recommend,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn table_with(preset: Vec<Card>) -> RoundEngine {
    let config = GameConfig::builder().build().expect("default config is valid");
    RoundEngine::new_with_shoe(config, Shoe::new_deterministic(preset))
}

/// §8 scenario 1, "Natural push" — adapted preset.
///
/// spec.md's own literal preset for this scenario (A♥, 7♣, K♠, 8♦) does not
/// actually produce a double natural under the deal order spec.md itself
/// states (player1, dealer-up, player2, dealer-hole): it deals the player an
/// A♥/K♠ blackjack against a dealer 7♣/8♦ non-natural, which is scenario 2's
/// shape, not a push. Substituted a preset that genuinely ties two naturals
/// (A♥/K♠ for the player, K♣/A♦ for the dealer) to faithfully exercise the
/// push-on-double-natural path; the running count assertion is recomputed
/// for the substituted cards rather than copied from spec.md's arithmetic.
#[test]
fn natural_push() {
    let mut table = table_with(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Ace, Suit::Diamonds),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());

    assert_eq!(table.phase(), GamePhase::RoundOver);
    assert_eq!(table.bankroll(), 1000);
    assert_eq!(table.hands()[0].outcome(), Some(Outcome::Push));
    assert_eq!(table.running_count(), -4);
}

/// §8 scenario 2, "Player blackjack, 3:2".
#[test]
fn player_blackjack_pays_three_to_two() {
    let mut table = table_with(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());

    assert_eq!(table.phase(), GamePhase::RoundOver);
    assert_eq!(table.hands()[0].outcome(), Some(Outcome::Blackjack));
    assert_eq!(table.bankroll(), 1150);
}

/// §8 scenario 3, "Double-down push".
#[test]
fn double_down_push() {
    let mut table = table_with(vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Six, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());
    assert_eq!(table.phase(), GamePhase::PlayerTurn);

    assert!(table.act(Action::Double));
    assert_eq!(table.hands()[0].bet(), 200);
    assert_eq!(table.phase(), GamePhase::DealerTurn);

    assert!(table.dealer_turn());
    assert_eq!(table.dealer().total(), 21);
    assert_eq!(table.hands()[0].outcome(), Some(Outcome::Push));
    assert_eq!(table.bankroll(), 1000);
}

/// §8 scenario 4, "Split aces, 1-card only".
#[test]
fn split_aces_one_card_only() {
    let mut table = table_with(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());
    assert_eq!(table.phase(), GamePhase::PlayerTurn);

    assert!(table.act(Action::Split));
    assert_eq!(table.phase(), GamePhase::DealerTurn);

    let hands = table.hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].total(), 21);
    assert_eq!(hands[0].outcome(), None);
    assert_eq!(hands[1].total(), 16);

    assert!(table.dealer_turn());
    assert!(table.dealer().is_bust());

    let hands = table.hands();
    assert_eq!(hands[0].outcome(), Some(Outcome::Win));
    assert_eq!(hands[1].outcome(), Some(Outcome::Win));
    assert_eq!(table.bankroll(), 1200);
}

/// §8 scenario 5, "Hole card counted once after insurance declined".
#[test]
fn hole_card_counted_once_after_insurance_declined() {
    let mut table = table_with(vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());
    assert_eq!(table.phase(), GamePhase::InsuranceOffer);
    assert_eq!(table.running_count(), 1);

    assert!(table.take_insurance(false));
    assert_eq!(table.running_count(), 2);
    assert_eq!(table.phase(), GamePhase::PlayerTurn);

    assert!(table.act(Action::Stand));
    assert!(table.dealer_turn());

    assert_eq!(table.dealer().total(), 18);
    assert_eq!(table.running_count(), 2);
}

/// §8 scenario 6, "Counting-trainer single-card drill".
#[test]
fn counting_trainer_single_card_drill() {
    let config = CountingTrainerConfig::new(6, DrillType::SingleCard, Some(1), false, None, true)
        .expect("valid config");
    let mut trainer = CountingTrainer::new();
    trainer.start_with_shoe(
        config,
        Shoe::new_deterministic(vec![
            card(Rank::Five, Suit::Hearts),
            card(Rank::King, Suit::Spades),
        ]),
    );

    assert_eq!(trainer.next_round(), vec![card(Rank::Five, Suit::Hearts)]);
    let feedback1 = trainer.submit_guess(1, None).expect("session started");
    assert!(feedback1.is_correct_rc);
    assert_eq!(feedback1.expected_rc, 1);
    assert_eq!(trainer.get_stats().streak(), 1);

    assert_eq!(trainer.next_round(), vec![card(Rank::King, Suit::Spades)]);
    let feedback2 = trainer.submit_guess(0, None).expect("session started");
    assert!(feedback2.is_correct_rc);
    assert_eq!(feedback2.expected_rc, 0);
    assert_eq!(trainer.get_stats().streak(), 2);
}

/// spec.md:101 — insurance declined, dealer has no natural, but the player
/// does: resolves Blackjack and goes straight to ROUND_OVER, not DEALER_TURN.
#[test]
fn player_natural_after_insurance_declined_goes_straight_to_round_over() {
    let mut table = table_with(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());
    assert_eq!(table.phase(), GamePhase::InsuranceOffer);
    assert_eq!(table.running_count(), -3);

    assert!(table.take_insurance(false));
    assert_eq!(table.phase(), GamePhase::RoundOver);
    assert_eq!(table.hands()[0].outcome(), Some(Outcome::Blackjack));
    assert_eq!(table.bankroll(), 1150);
    assert_eq!(table.running_count(), -2);
}

#[test]
fn invalid_action_for_current_phase_returns_false() {
    let mut table = table_with(vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
    ]);

    // Betting phase: acting on a non-existent hand is invalid.
    assert!(!table.act(Action::Hit));
    assert!(!table.message().is_empty());
}

#[test]
fn start_round_during_player_turn_is_rejected_without_mutation() {
    let mut table = table_with(vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());
    assert_eq!(table.phase(), GamePhase::PlayerTurn);

    let bankroll_before = table.bankroll();
    assert!(!table.start_round(50));
    assert_eq!(table.phase(), GamePhase::PlayerTurn);
    assert_eq!(table.bankroll(), bankroll_before);
}

/// spec.md:112 — `next_round()` is the only documented way back to BETTING
/// from ROUND_OVER; `start_round` must reject being called directly.
#[test]
fn next_round_clears_the_table_and_returns_to_betting() {
    let mut table = table_with(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::King, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ]);

    assert!(table.start_round(100));
    assert!(table.deal_initial());
    assert_eq!(table.phase(), GamePhase::RoundOver);

    assert!(!table.start_round(100));
    assert_eq!(table.phase(), GamePhase::RoundOver);

    assert!(table.next_round());
    assert_eq!(table.phase(), GamePhase::Betting);
    assert!(table.hands().is_empty());
    assert_eq!(table.dealer().cards().len(), 0);
}

/// Grounded on the original source's `GameEngine.new_session()`.
#[test]
fn new_session_resets_bankroll_shoe_and_stats() {
    let config = GameConfig::builder().build().expect("default config is valid");
    let mut table = RoundEngine::new(config, 42);

    assert!(table.start_round(100));
    assert_eq!(table.bankroll(), 900);

    table.new_session(7);
    assert_eq!(table.phase(), GamePhase::Betting);
    assert_eq!(table.bankroll(), 1000);
    assert!(table.hands().is_empty());
    assert_eq!(table.stats().hands_played(), 0);
}

#[test]
fn strategy_lookup_is_total_across_hard_soft_and_pair_hands() {
    let caps = Capabilities {
        can_double: true,
        can_split: true,
        can_surrender: true,
    };

    for &dealer_rank in &Rank::ALL {
        let dealer_upcard = card(dealer_rank, Suit::Clubs);

        for total in 4u8..=20 {
            let low = total / 2;
            let high = total - low;
            if !(2..=11).contains(&low) || !(2..=11).contains(&high) {
                continue;
            }
            let Some(low_rank) = rank_for_value(low) else { continue };
            let Some(high_rank) = rank_for_value(high) else { continue };
            let hard_hand = [card(low_rank, Suit::Hearts), card(high_rank, Suit::Spades)];
            let recommendation = recommend(&hard_hand, dealer_upcard, caps, false, false, 0.0);
            assert!(matches!(
                recommendation.action,
                Action::Hit | Action::Stand | Action::Double | Action::Surrender | Action::Split
            ));
        }

        for &rank in &Rank::ALL {
            let pair = [card(rank, Suit::Hearts), card(rank, Suit::Spades)];
            let recommendation = recommend(&pair, dealer_upcard, caps, false, false, 0.0);
            assert!(matches!(
                recommendation.action,
                Action::Hit | Action::Stand | Action::Double | Action::Surrender | Action::Split
            ));
        }

        for low in 2u8..=9 {
            let Some(low_rank) = rank_for_value(low) else { continue };
            let soft_hand = [card(Rank::Ace, Suit::Hearts), card(low_rank, Suit::Spades)];
            let recommendation = recommend(&soft_hand, dealer_upcard, caps, false, false, 0.0);
            assert!(matches!(
                recommendation.action,
                Action::Hit | Action::Stand | Action::Double | Action::Surrender | Action::Split
            ));
        }
    }
}

fn rank_for_value(value: u8) -> Option<Rank> {
    match value {
        2 => Some(Rank::Two),
        3 => Some(Rank::Three),
        4 => Some(Rank::Four),
        5 => Some(Rank::Five),
        6 => Some(Rank::Six),
        7 => Some(Rank::Seven),
        8 => Some(Rank::Eight),
        9 => Some(Rank::Nine),
        10 => Some(Rank::Ten),
        11 => Some(Rank::Ace),
        _ => None,
    }
}
