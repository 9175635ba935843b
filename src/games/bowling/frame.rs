//! A single scoring frame.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pins in a full rack.
pub const PIN_COUNT: u8 = 10;

/// Frames in a game.
pub const FRAME_COUNT: usize = 10;

/// A strike or a spare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Strike,
    Spare,
}

/// One frame of a scoresheet.
///
/// Rolls are appended as balls are thrown. The scorer marks the frame
/// complete once no more balls belong to it, and fills `total` once the
/// frame's score (including any bonus) is known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    number: u8,
    /// At most three rolls; only the tenth frame ever holds three.
    rolls: SmallVec<[u8; 3]>,
    complete: bool,
    total: Option<u16>,
}

impl Frame {
    /// Create an empty frame. `number` is 1-based.
    #[must_use]
    pub fn new(number: u8) -> Self {
        debug_assert!((1..=FRAME_COUNT as u8).contains(&number));
        Self {
            number,
            rolls: SmallVec::new(),
            complete: false,
            total: None,
        }
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub fn first_roll(&self) -> Option<u8> {
        self.rolls.first().copied()
    }

    #[must_use]
    pub fn second_roll(&self) -> Option<u8> {
        self.rolls.get(1).copied()
    }

    #[must_use]
    pub fn third_roll(&self) -> Option<u8> {
        self.rolls.get(2).copied()
    }

    /// All rolls recorded so far, in order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Score for this frame, if settled.
    #[must_use]
    pub fn total(&self) -> Option<u16> {
        self.total
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// First ball knocked down the whole rack.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.first_roll() == Some(PIN_COUNT)
    }

    /// First two balls cleared the rack without a strike.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        match (self.first_roll(), self.second_roll()) {
            (Some(first), Some(second)) => first < PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Raw pins across this frame's own rolls.
    #[must_use]
    pub fn pin_sum(&self) -> u16 {
        self.rolls.iter().map(|&p| u16::from(p)).sum()
    }

    pub(crate) fn push_roll(&mut self, pins: u8) {
        debug_assert!(self.rolls.len() < 3, "Frame {} already has three rolls", self.number);
        self.rolls.push(pins);
    }

    pub(crate) fn mark_complete(&mut self) {
        self.complete = true;
    }

    pub(crate) fn set_total(&mut self, total: Option<u16>) {
        self.total = total;
    }
}
