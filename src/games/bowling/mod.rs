//! Ten-frame bowling.
//!
//! `BowlingScorer` is the per-sheet state machine; `BowlingSession` seats
//! a roster and rotates bowlers frame by frame. How frame totals are
//! computed is chosen by `ScoringRule`.

mod frame;
mod scoring;
mod scorer;
mod session;

pub use frame::{Frame, Mark, FRAME_COUNT, PIN_COUNT};
pub use scoring::frame_totals;
pub use scorer::{BowlingScorer, BowlingSnapshot, ThrowOutcome};
pub use session::{BowlingSession, GameResult, Standing};
