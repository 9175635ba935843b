//! Stoplight: a two-driver Go/Stop game with a fixed payoff table.
//!
//! The two asymmetric outcomes, where one driver goes while the other
//! waits, are the game's pure Nash equilibria. `StoplightEngine` plays
//! live rounds against a random computer; `SimulatedRounds` plays
//! random-vs-random batches for frequency analysis.

mod payoff;
mod engine;
mod simulation;

pub use payoff::{Choice, Outcome, PayoffTable, PAYOFF_TABLE};
pub use engine::{RoundResult, StoplightEngine};
pub use simulation::{SimulatedRounds, SimulationSummary, EXPECTED_RANDOM_NASH_RATE};
