//! The Counting Trainer: a Hi-Lo counting drill, independent of the Round
//! Engine. Holds its own [`Shoe`] and [`Counter`] (§5: no shared mutable
//! state unless a collaborator wires the two together explicitly).

use crate::card::Card;
use crate::config::CountingTrainerConfig;
use crate::counter::Counter;
use crate::shoe::Shoe;
use crate::stats::TrainerStats;

/// The Trainer's fixed shoe penetration: it drills counting, not table
/// rules, so it reshuffles far later than any real table would.
const TRAINER_PENETRATION: f64 = 0.9;

/// Feedback for one guess, returned by [`CountingTrainer::submit_guess`].
#[derive(Debug, Clone, PartialEq)]
pub struct GuessFeedback {
    /// Whether the running-count guess matched.
    pub is_correct_rc: bool,
    /// The running count the guess was evaluated against.
    pub expected_rc: i32,
    /// The guess itself.
    pub user_rc: i32,
    /// Whether the true-count guess matched, within tolerance. `None` if
    /// `ask_true_count` is off or no guess was supplied.
    pub is_correct_tc: Option<bool>,
    /// The true count the guess was evaluated against.
    pub expected_tc: f64,
    /// The true-count guess, if supplied.
    pub user_tc: Option<f64>,
    /// Estimated decks remaining in the trainer's shoe.
    pub decks_remaining: f64,
    /// Per-card Hi-Lo deltas for the round just dealt, e.g. `"5♥: +1"`.
    pub delta_explanation: Vec<String>,
}

struct Session {
    config: CountingTrainerConfig,
    shoe: Shoe,
    counter: Counter,
    last_round_cards: Vec<Card>,
    expected_rc: i32,
}

/// A Hi-Lo counting drill session.
///
/// Starts unattached to any shoe; [`CountingTrainer::start`] (or
/// [`CountingTrainer::start_with_shoe`], the test seam) must be called
/// before [`CountingTrainer::next_round`] or [`CountingTrainer::submit_guess`]
/// will do anything.
#[derive(Default)]
pub struct CountingTrainer {
    session: Option<Session>,
    stats: TrainerStats,
}

impl CountingTrainer {
    /// A trainer with no session started yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh session with a freshly shuffled, seeded random shoe at
    /// the trainer's fixed high penetration.
    pub fn start(&mut self, config: CountingTrainerConfig, seed: u64) {
        let shoe = Shoe::new(config.num_decks(), TRAINER_PENETRATION, seed);
        self.start_with_shoe(config, shoe);
    }

    /// Starts a fresh session with a caller-supplied shoe, the public test
    /// seam for exercising exact draw sequences (§8 scenario 6).
    pub fn start_with_shoe(&mut self, config: CountingTrainerConfig, shoe: Shoe) {
        self.session = Some(Session {
            config,
            shoe,
            counter: Counter::new(),
            last_round_cards: Vec::new(),
            expected_rc: 0,
        });
        self.stats = TrainerStats::new();
    }

    /// Deals the next round: `cards_per_round` cards, or fewer if the shoe
    /// runs out before that many are drawn.
    ///
    /// Reshuffles first if the shoe needs it, resetting the counter. Returns
    /// an empty vector if no session has been started. The running count is
    /// **not** advanced here — [`CountingTrainer::submit_guess`] evaluates
    /// the guess against the pre-commit `expected_rc` and only then commits
    /// it, regardless of whether the guess was right.
    pub fn next_round(&mut self) -> Vec<Card> {
        let Some(session) = &mut self.session else {
            return Vec::new();
        };

        if session.shoe.needs_reshuffle() {
            session.shoe.rebuild_and_shuffle();
            session.counter.reset();
        }

        let mut cards = Vec::with_capacity(session.config.cards_per_round() as usize);
        for _ in 0..session.config.cards_per_round() {
            match session.shoe.draw() {
                Ok(card) => cards.push(card),
                Err(_) => break,
            }
        }

        let mut expected_rc = session.counter.running_count();
        for card in &cards {
            expected_rc += card.hi_lo_delta();
        }

        session.last_round_cards = cards.clone();
        session.expected_rc = expected_rc;
        cards
    }

    /// Evaluates a guess against the round dealt by the last
    /// [`CountingTrainer::next_round`] call and commits the running count.
    ///
    /// Returns `None` if no session has been started.
    pub fn submit_guess(&mut self, rc_guess: i32, tc_guess: Option<f64>) -> Option<GuessFeedback> {
        let session = self.session.as_mut()?;

        let decks_remaining = session.shoe.decks_remaining();
        let expected_rc = session.expected_rc;
        #[expect(
            clippy::cast_precision_loss,
            reason = "running counts stay small enough for f64 to represent exactly"
        )]
        let expected_tc = round_to_tenth(f64::from(expected_rc) / decks_remaining.max(0.5));

        let is_correct_rc = rc_guess == expected_rc;
        let is_correct_tc = if session.config.ask_true_count() {
            tc_guess.map(|guess| (guess - expected_tc).abs() <= 0.5)
        } else {
            None
        };

        let delta_explanation = session
            .last_round_cards
            .iter()
            .map(|card| {
                let delta = card.hi_lo_delta();
                let sign = if delta > 0 { "+" } else { "" };
                format!("{card}: {sign}{delta}")
            })
            .collect();

        self.stats.record_guess(is_correct_rc, is_correct_tc);
        session.counter.update_many(&session.last_round_cards);

        Some(GuessFeedback {
            is_correct_rc,
            expected_rc,
            user_rc: rc_guess,
            is_correct_tc,
            expected_tc,
            user_tc: tc_guess,
            decks_remaining,
            delta_explanation,
        })
    }

    /// This session's aggregate statistics so far.
    #[must_use]
    pub const fn get_stats(&self) -> TrainerStats {
        self.stats
    }

    /// Ends the session (idempotent) and returns its final statistics.
    pub fn stop(&mut self) -> TrainerStats {
        self.session = None;
        self.stats
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::config::DrillType;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    fn trainer_with(cards: Vec<Card>, ask_true_count: bool) -> CountingTrainer {
        let config =
            CountingTrainerConfig::new(6, DrillType::SingleCard, Some(1), ask_true_count, None, true)
                .expect("valid config");
        let mut trainer = CountingTrainer::new();
        trainer.start_with_shoe(config, Shoe::new_deterministic(cards));
        trainer
    }

    #[test]
    fn single_card_drill_tracks_running_count_across_rounds() {
        let mut trainer = trainer_with(vec![card(Rank::Five), card(Rank::King)], false);

        let round1 = trainer.next_round();
        assert_eq!(round1, vec![card(Rank::Five)]);
        let feedback1 = trainer.submit_guess(1, None).expect("session started");
        assert!(feedback1.is_correct_rc);
        assert_eq!(feedback1.expected_rc, 1);

        let round2 = trainer.next_round();
        assert_eq!(round2, vec![card(Rank::King)]);
        let feedback2 = trainer.submit_guess(0, None).expect("session started");
        assert!(feedback2.is_correct_rc);
        assert_eq!(feedback2.expected_rc, 0);

        assert_eq!(trainer.get_stats().streak(), 2);
    }

    #[test]
    fn wrong_guess_resets_streak() {
        let mut trainer = trainer_with(vec![card(Rank::Five), card(Rank::Five)], false);
        trainer.next_round();
        trainer.submit_guess(1, None);
        trainer.next_round();
        trainer.submit_guess(99, None);
        assert_eq!(trainer.get_stats().streak(), 0);
        assert_eq!(trainer.get_stats().best_streak(), 1);
    }

    #[test]
    fn expected_rc_is_not_committed_until_guess_is_submitted() {
        let mut trainer = trainer_with(vec![card(Rank::Five)], false);
        trainer.next_round();
        // Guess not yet submitted: a second next_round() call would be a
        // misuse in practice, but the running count underneath must still
        // read zero until submit_guess() commits it.
        let session = trainer.session.as_ref().expect("session started");
        assert_eq!(session.counter.running_count(), 0);
        assert_eq!(session.expected_rc, 1);
    }

    #[test]
    fn true_count_tolerance_is_half_a_point() {
        let config =
            CountingTrainerConfig::new(1, DrillType::SingleCard, Some(4), true, None, true)
                .expect("valid config");
        let mut trainer = CountingTrainer::new();
        trainer.start_with_shoe(
            config,
            Shoe::new_deterministic(vec![
                card(Rank::Five),
                card(Rank::Five),
                card(Rank::Five),
                card(Rank::Five),
            ]),
        );
        trainer.next_round();
        // Running count after four Fives is +4; the shoe is now empty, so
        // decks_remaining floors to 0.5 and expected_tc is 4 / 0.5 = 8.0.
        let close = trainer.submit_guess(4, Some(8.2)).expect("session started");
        assert_eq!(close.is_correct_tc, Some(true));
    }

    #[test]
    fn true_count_guess_outside_tolerance_is_marked_wrong() {
        let config =
            CountingTrainerConfig::new(1, DrillType::SingleCard, Some(4), true, None, true)
                .expect("valid config");
        let mut trainer = CountingTrainer::new();
        trainer.start_with_shoe(
            config,
            Shoe::new_deterministic(vec![
                card(Rank::Five),
                card(Rank::Five),
                card(Rank::Five),
                card(Rank::Five),
            ]),
        );
        trainer.next_round();
        let far = trainer.submit_guess(4, Some(0.0)).expect("session started");
        assert_eq!(far.is_correct_tc, Some(false));
    }

    #[test]
    fn stop_clears_the_session() {
        let mut trainer = trainer_with(vec![card(Rank::Five)], false);
        trainer.next_round();
        let stats = trainer.stop();
        assert_eq!(stats.attempts(), 0);
        assert!(trainer.next_round().is_empty());
    }
}
