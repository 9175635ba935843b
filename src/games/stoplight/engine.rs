//! Live stoplight rounds against a random computer opponent.
//!
//! A round opens with both choices unset. `resolve_round` fills both in,
//! scores them, and closes the round; a closed round refuses a second
//! resolution until `start_new_round` opens the next one. Cumulative scores
//! carry across rounds.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, PlayerId, PlayerMap, RandomSource, StoplightConfig};

use super::payoff::{Choice, Outcome, PAYOFF_TABLE};
use super::simulation::SimulatedRounds;

/// A resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub human_choice: Choice,
    pub computer_choice: Choice,
    /// `(human, computer)` payoffs for this round.
    pub payoffs: (i32, i32),
    /// `(human, computer)` running totals including this round.
    pub scores: (i64, i64),
    pub is_nash_equilibrium: bool,
    pub outcome: Outcome,
}

impl RoundResult {
    /// Score a choice pair on top of the given running totals.
    pub(crate) fn score(round_number: u32, human: Choice, computer: Choice, prior: (i64, i64)) -> Self {
        let payoffs = PAYOFF_TABLE.payoffs(human, computer);
        Self {
            round_number,
            human_choice: human,
            computer_choice: computer,
            payoffs,
            scores: (prior.0 + i64::from(payoffs.0), prior.1 + i64::from(payoffs.1)),
            is_nash_equilibrium: PAYOFF_TABLE.is_nash_equilibrium(human, computer),
            outcome: Outcome::of(human, computer),
        }
    }
}

/// Draw a choice uniformly.
pub(crate) fn draw_choice<R: RandomSource>(rng: &mut R) -> Choice {
    Choice::ALL[rng.next_below(Choice::ALL.len())]
}

/// Round-by-round stoplight game.
#[derive(Clone, Debug)]
pub struct StoplightEngine<R: RandomSource = GameRng> {
    round_number: u32,
    human_choice: Option<Choice>,
    computer_choice: Option<Choice>,
    scores: PlayerMap<i64>,
    history: Vector<RoundResult>,
    rng: R,
}

impl StoplightEngine<GameRng> {
    /// Create an engine whose opponent is seeded from `config`.
    #[must_use]
    pub fn new(config: &StoplightConfig) -> Self {
        Self::with_source(GameRng::new(config.seed).for_context("opponent"))
    }
}

impl<R: RandomSource> StoplightEngine<R> {
    /// Create an engine drawing the computer's choices from `rng`.
    pub fn with_source(rng: R) -> Self {
        log::info!("Stoplight game started");
        Self {
            round_number: 1,
            human_choice: None,
            computer_choice: None,
            scores: PlayerMap::with_value(2, 0),
            history: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn human_choice(&self) -> Option<Choice> {
        self.human_choice
    }

    #[must_use]
    pub fn computer_choice(&self) -> Option<Choice> {
        self.computer_choice
    }

    /// Both choices are in and the round is closed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.human_choice.is_some() && self.computer_choice.is_some()
    }

    /// Cumulative score for a seat.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores[player]
    }

    /// Every resolved round so far. Cloning is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<RoundResult> {
        &self.history
    }

    /// Resolve the open round with the human's choice.
    ///
    /// The computer's choice is drawn from the injected source only after
    /// the round is known to be open, so a rejected call consumes no draw.
    pub fn resolve_round(&mut self, human: Choice) -> Result<RoundResult, GameError> {
        if self.is_resolved() {
            log::warn!("Round {} already resolved, ignoring {}", self.round_number, human);
            return Err(GameError::RoundAlreadyResolved(self.round_number));
        }

        let computer = draw_choice(&mut self.rng);
        let prior = (self.scores[PlayerId::HUMAN], self.scores[PlayerId::COMPUTER]);
        let result = RoundResult::score(self.round_number, human, computer, prior);

        self.human_choice = Some(human);
        self.computer_choice = Some(computer);
        self.scores[PlayerId::HUMAN] = result.scores.0;
        self.scores[PlayerId::COMPUTER] = result.scores.1;
        self.history.push_back(result.clone());

        log::info!(
            "Round {}: human chose {}, computer chose {} -> {:?} (nash: {})",
            result.round_number,
            human,
            computer,
            result.payoffs,
            result.is_nash_equilibrium
        );

        Ok(result)
    }

    /// Open the next round. Scores carry over.
    pub fn start_new_round(&mut self) {
        self.round_number += 1;
        self.human_choice = None;
        self.computer_choice = None;
        log::info!("Starting round {}", self.round_number);
    }

    /// Lazily simulate `n` rounds of random play on both sides.
    ///
    /// Draws come from a fork of the opponent's source, so the live game's
    /// scores and round counter are untouched.
    pub fn simulate_rounds(&mut self, n: usize) -> SimulatedRounds<R>
    where
        R: Clone,
    {
        SimulatedRounds::new(self.rng.fork(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, ScriptedSource};

    // Script values index into Choice::ALL: 0 = Go, 1 = Stop
    fn forced(script: Vec<usize>) -> StoplightEngine<ScriptedSource> {
        StoplightEngine::with_source(ScriptedSource::new(script))
    }

    #[test]
    fn test_go_against_stop() {
        let mut engine = forced(vec![1]);
        let result = engine.resolve_round(Choice::Go).unwrap();

        assert_eq!(result.computer_choice, Choice::Stop);
        assert_eq!(result.payoffs, (5, 0));
        assert!(result.is_nash_equilibrium);
        assert_eq!(result.outcome, Outcome::HumanProceeds);
        assert_eq!(engine.score(PlayerId::HUMAN), 5);
        assert_eq!(engine.score(PlayerId::COMPUTER), 0);
    }

    #[test]
    fn test_go_against_go() {
        let mut engine = forced(vec![0]);
        let result = engine.resolve_round(Choice::Go).unwrap();

        assert_eq!(result.payoffs, (-10, -10));
        assert!(!result.is_nash_equilibrium);
        assert_eq!(result.outcome, Outcome::Collision);
    }

    #[test]
    fn test_resolved_round_rejects_second_choice() {
        let mut engine = forced(vec![1, 0]);
        engine.resolve_round(Choice::Stop).unwrap();

        let err = engine.resolve_round(Choice::Go).unwrap_err();
        assert_eq!(err, GameError::RoundAlreadyResolved(1));
        assert_eq!(err.kind(), ErrorKind::PrematureCall);

        assert_eq!(engine.human_choice(), Some(Choice::Stop));
        assert_eq!(engine.score(PlayerId::HUMAN), 1);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_new_round_keeps_scores() {
        let mut engine = forced(vec![1, 1]);
        engine.resolve_round(Choice::Go).unwrap();
        engine.start_new_round();

        assert_eq!(engine.round_number(), 2);
        assert!(!engine.is_resolved());
        assert_eq!(engine.human_choice(), None);
        assert_eq!(engine.computer_choice(), None);

        let second = engine.resolve_round(Choice::Stop).unwrap();
        assert_eq!(second.round_number, 2);
        assert_eq!(second.scores, (6, 1));
        assert_eq!(engine.score(PlayerId::HUMAN), 6);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let config = StoplightConfig::default().with_seed(9);
        let mut a = StoplightEngine::new(&config);
        let mut b = StoplightEngine::new(&config);

        for _ in 0..20 {
            let ra = a.resolve_round(Choice::Stop).unwrap();
            let rb = b.resolve_round(Choice::Stop).unwrap();
            assert_eq!(ra, rb);
            a.start_new_round();
            b.start_new_round();
        }
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut engine = forced(vec![0]);
        engine.resolve_round(Choice::Stop).unwrap();
        let snapshot = engine.history().clone();

        engine.start_new_round();
        engine.resolve_round(Choice::Stop).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_round_result_serialization() {
        let mut engine = forced(vec![0]);
        let result = engine.resolve_round(Choice::Stop).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: RoundResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
