//! Batch simulation of random-vs-random play.
//!
//! [`SimulatedRounds`] is a lazy, finite iterator that can be rewound to
//! replay the exact same rounds. [`SimulationSummary`] folds a run into
//! frequency counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

use super::engine::{draw_choice, RoundResult};
use super::payoff::Outcome;

/// Nash rate expected when both sides pick uniformly: two of the four
/// equally likely pairs are equilibria.
pub const EXPECTED_RANDOM_NASH_RATE: f64 = 0.5;

/// Lazily simulated rounds.
///
/// Round numbers start at 1 and `scores` accumulate within this run only.
#[derive(Clone, Debug)]
pub struct SimulatedRounds<R> {
    origin: R,
    rng: R,
    total: usize,
    produced: usize,
    scores: (i64, i64),
}

impl<R: RandomSource + Clone> SimulatedRounds<R> {
    pub fn new(rng: R, total: usize) -> Self {
        Self {
            origin: rng.clone(),
            rng,
            total,
            produced: 0,
            scores: (0, 0),
        }
    }

    /// Rewind to the first round; the replay yields identical results.
    pub fn restart(&mut self) {
        self.rng = self.origin.clone();
        self.produced = 0;
        self.scores = (0, 0);
    }

    /// Consume the remaining rounds into a summary.
    pub fn summarize(self) -> SimulationSummary {
        let summary = self.fold(SimulationSummary::new(), |mut summary, round| {
            summary.record(&round);
            summary
        });
        log::info!(
            "Nash equilibria achieved: {}/{} ({:.1}%)",
            summary.nash_count,
            summary.rounds,
            summary.nash_rate() * 100.0
        );
        summary
    }
}

impl<R: RandomSource + Clone> Iterator for SimulatedRounds<R> {
    type Item = RoundResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.produced == self.total {
            return None;
        }

        let human = draw_choice(&mut self.rng);
        let computer = draw_choice(&mut self.rng);
        self.produced += 1;

        let result = RoundResult::score(round_number(self.produced), human, computer, self.scores);
        self.scores = result.scores;
        log::debug!("Simulated round {}: {} / {}", result.round_number, human, computer);
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.produced;
        (remaining, Some(remaining))
    }
}

impl<R: RandomSource + Clone> ExactSizeIterator for SimulatedRounds<R> {}

/// Round label for the `produced`-th simulated round, pinned at `u32::MAX`
/// for runs longer than a round number can count.
fn round_number(produced: usize) -> u32 {
    u32::try_from(produced).unwrap_or(u32::MAX)
}

/// Aggregate statistics over a set of rounds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub rounds: usize,
    pub nash_count: usize,
    pub outcome_counts: FxHashMap<Outcome, usize>,
    /// `(human, computer)` payoff totals.
    pub payoff_totals: (i64, i64),
}

impl SimulationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round into the summary.
    pub fn record(&mut self, round: &RoundResult) {
        self.rounds += 1;
        if round.is_nash_equilibrium {
            self.nash_count += 1;
        }
        *self.outcome_counts.entry(round.outcome).or_insert(0) += 1;
        self.payoff_totals.0 += i64::from(round.payoffs.0);
        self.payoff_totals.1 += i64::from(round.payoffs.1);
    }

    /// Fraction of rounds that landed on an equilibrium.
    #[must_use]
    pub fn nash_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.nash_count as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcome_counts.get(&outcome).copied().unwrap_or(0)
    }
}

impl<'a> FromIterator<&'a RoundResult> for SimulationSummary {
    fn from_iter<I: IntoIterator<Item = &'a RoundResult>>(iter: I) -> Self {
        let mut summary = Self::new();
        for round in iter {
            summary.record(round);
        }
        summary
    }
}
