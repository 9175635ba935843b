//! Error type shared by the bowling scorer and the stoplight engine.
//!
//! Every failing operation leaves the state it was called on untouched, so
//! callers can surface the error and carry on with the same session.

use thiserror::Error;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument itself is out of range or unparseable.
    InvalidInput,
    /// The call arrived while a previous operation was still pending.
    PrematureCall,
    /// The game has already ended.
    Finished,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot knock down {pins} pins: only {standing} standing")]
    InvalidPinCount { pins: u8, standing: u8 },
    #[error("Unrecognised choice {0:?}, expected Go or Stop")]
    InvalidChoice(String),
    #[error("A throw is already in progress")]
    ThrowInProgress,
    #[error("Round {0} is already resolved; start a new round first")]
    RoundAlreadyResolved(u32),
    #[error("The game is over")]
    GameOver,
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidPinCount { .. } | GameError::InvalidChoice(_) => ErrorKind::InvalidInput,
            GameError::ThrowInProgress | GameError::RoundAlreadyResolved(_) => ErrorKind::PrematureCall,
            GameError::GameOver => ErrorKind::Finished,
        }
    }
}
