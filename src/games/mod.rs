//! Game implementations built on `crate::core`.
//!
//! - `bowling`: ten-frame scorer and multi-bowler sessions
//! - `stoplight`: Go/Stop rounds against a random opponent

pub mod bowling;
pub mod stoplight;
