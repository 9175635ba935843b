//! Frame totals under each [`ScoringRule`].

use crate::core::ScoringRule;

use super::frame::{Frame, FRAME_COUNT};

/// Compute every frame's total from the rolls recorded so far.
///
/// A frame has no total until it is complete. Under the standard rule a
/// strike or spare also waits for its bonus balls, which may come from the
/// following one or two frames.
#[must_use]
pub fn frame_totals(frames: &[Frame], rule: ScoringRule) -> [Option<u16>; FRAME_COUNT] {
    let mut totals = [None; FRAME_COUNT];

    match rule {
        ScoringRule::Simplified => {
            for (total, frame) in totals.iter_mut().zip(frames) {
                if frame.is_complete() {
                    *total = Some(frame.pin_sum());
                }
            }
        }
        ScoringRule::Standard => {
            let rolls: Vec<u16> = frames
                .iter()
                .flat_map(|f| f.rolls().iter().map(|&p| u16::from(p)))
                .collect();

            // Index into `rolls` of the current frame's first ball
            let mut cursor = 0;
            for (i, frame) in frames.iter().enumerate().take(FRAME_COUNT) {
                let own = frame.rolls().len();
                if own == 0 {
                    break;
                }

                // The tenth frame carries its own bonus balls
                let bonus = if i + 1 == FRAME_COUNT {
                    0
                } else if frame.is_strike() {
                    2
                } else if frame.is_spare() {
                    1
                } else {
                    0
                };

                if frame.is_complete() {
                    totals[i] = rolls
                        .get(cursor..cursor + own + bonus)
                        .map(|balls| balls.iter().sum());
                }
                cursor += own;
            }
        }
    }

    totals
}
