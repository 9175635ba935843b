//! Choices, the payoff table, and outcome classification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// A driver's move at the light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Go,
    Stop,
}

impl Choice {
    /// Both choices, in draw order.
    pub const ALL: [Choice; 2] = [Choice::Go, Choice::Stop];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Choice::Go => 0,
            Choice::Stop => 1,
        }
    }

    /// The choice a unilateral deviation would switch to.
    #[must_use]
    pub const fn other(self) -> Choice {
        match self {
            Choice::Go => Choice::Stop,
            Choice::Stop => Choice::Go,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Go => write!(f, "Go"),
            Choice::Stop => write!(f, "Stop"),
        }
    }
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            c if c.eq_ignore_ascii_case("go") => Ok(Choice::Go),
            c if c.eq_ignore_ascii_case("stop") => Ok(Choice::Stop),
            _ => Err(GameError::InvalidChoice(s.to_string())),
        }
    }
}

/// What happened at the intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both went.
    Collision,
    /// Human went, computer waited.
    HumanProceeds,
    /// Computer went, human waited.
    ComputerProceeds,
    /// Both waited: safe but nobody moved.
    BothStopped,
}

impl Outcome {
    #[must_use]
    pub const fn of(human: Choice, computer: Choice) -> Outcome {
        match (human, computer) {
            (Choice::Go, Choice::Go) => Outcome::Collision,
            (Choice::Go, Choice::Stop) => Outcome::HumanProceeds,
            (Choice::Stop, Choice::Go) => Outcome::ComputerProceeds,
            (Choice::Stop, Choice::Stop) => Outcome::BothStopped,
        }
    }
}

/// Two-player payoff table keyed by (row choice, column choice).
///
/// Entries are `(row payoff, column payoff)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayoffTable {
    entries: [[(i32, i32); 2]; 2],
}

/// The stoplight game's payoffs.
pub const PAYOFF_TABLE: PayoffTable = PayoffTable {
    entries: [
        // Go row
        [(-10, -10), (5, 0)],
        // Stop row
        [(0, 5), (1, 1)],
    ],
};

impl PayoffTable {
    /// Payoffs for the pair `(row, column)`.
    #[must_use]
    pub const fn payoffs(&self, row: Choice, column: Choice) -> (i32, i32) {
        self.entries[row.index()][column.index()]
    }

    /// Strict pure-strategy Nash equilibrium check.
    ///
    /// Holds when either player switching alone would strictly lower
    /// that player's own payoff.
    #[must_use]
    pub fn is_nash_equilibrium(&self, row: Choice, column: Choice) -> bool {
        let (row_payoff, column_payoff) = self.payoffs(row, column);
        let row_deviation = self.payoffs(row.other(), column).0;
        let column_deviation = self.payoffs(row, column.other()).1;

        row_deviation < row_payoff && column_deviation < column_payoff
    }

    /// Every pure equilibrium of the table.
    pub fn equilibria(&self) -> impl Iterator<Item = (Choice, Choice)> + '_ {
        Choice::ALL
            .into_iter()
            .flat_map(|row| Choice::ALL.into_iter().map(move |column| (row, column)))
            .filter(move |&(row, column)| self.is_nash_equilibrium(row, column))
    }
}
