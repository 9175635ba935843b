//! Core types shared by both games: errors, RNG, players, configuration.
//!
//! Nothing here knows about pins or traffic lights. The games in
//! `crate::games` build on these pieces.

pub mod error;
pub mod player;
pub mod rng;
pub mod config;

pub use error::{ErrorKind, GameError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedSource};
pub use config::{BowlingConfig, GameMode, ScoringRule, StoplightConfig};
