//! # parlor-games
//!
//! Scoring and round engines for two small turn-based games, free of any
//! rendering or input handling.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: Each game is a struct instantiated per session and
//!    passed to whatever drives it. There are no globals.
//!
//! 2. **Explicit guards**: A throw in flight or an already resolved round
//!    is rejected by the state machine itself, not by a disabled button.
//!
//! 3. **Transactional calls**: A rejected call returns a `GameError` and
//!    leaves the state untouched.
//!
//! 4. **Injected randomness**: Opponents draw through `RandomSource`, so
//!    tests can script every draw.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, player seats, configuration
//! - `games::bowling`: ten-frame scorer and multi-bowler sessions
//! - `games::stoplight`: Go/Stop rounds, payoff table, batch simulation
//!
//! ## Example
//!
//! ```
//! use parlor_games::{BowlingScorer, ScoringRule};
//!
//! let mut scorer = BowlingScorer::new(ScoringRule::Simplified);
//! let outcome = scorer.record_throw(10).unwrap();
//!
//! assert!(outcome.frame_complete);
//! assert_eq!(scorer.current_frame(), 2);
//! assert_eq!(scorer.current_ball(), 1);
//! ```

pub mod core;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ErrorKind, GameError,
    GameRng, RandomSource, ScriptedSource,
    PlayerId, PlayerMap,
    BowlingConfig, GameMode, ScoringRule, StoplightConfig,
};

pub use crate::games::bowling::{
    BowlingScorer, BowlingSession, BowlingSnapshot, Frame, GameResult, Mark, Standing, ThrowOutcome,
};

pub use crate::games::stoplight::{
    Choice, Outcome, PayoffTable, RoundResult, SimulatedRounds, SimulationSummary, StoplightEngine,
    PAYOFF_TABLE,
};
