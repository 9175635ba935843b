//! Single-sheet bowling scorer.
//!
//! ## State machine
//!
//! States are (frame 1..=10) × (ball 1..=3) plus a throw-in-progress flag.
//! Only [`BowlingScorer::record_throw`] moves the frame/ball counters, and
//! it moves them exactly once per accepted throw:
//!
//! - ball 1 strike: frame complete, next frame
//! - ball 1 otherwise: ball 2
//! - ball 2: frame complete, next frame
//!
//! Under [`ScoringRule::Standard`] the tenth frame resets the rack after a
//! mark and grants a third ball after a strike or spare. Completing the
//! tenth frame ends the game.
//!
//! ## Throw gate
//!
//! The physics loop calls [`BowlingScorer::begin_throw`] when the ball is
//! released and `record_throw` once it settles. A second `begin_throw`
//! before the pins are counted is rejected, which keeps scoring at most
//! once per throw without relying on a disabled button.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, ScoringRule};

use super::frame::{Frame, Mark, FRAME_COUNT, PIN_COUNT};
use super::scoring::frame_totals;

/// What a single accepted throw did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    /// Frame the throw belonged to (1-based).
    pub frame: u8,
    /// Ball within that frame (1-based).
    pub ball: u8,
    /// Pins knocked down by this throw.
    pub pins: u8,
    /// Set when this throw cleared the rack.
    pub mark: Option<Mark>,
    /// The frame needs no more balls.
    pub frame_complete: bool,
    /// Set when this throw ended the game.
    pub final_score: Option<u16>,
}

/// Read-only view of a scorer, for a rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingSnapshot {
    pub rule: ScoringRule,
    pub current_frame: u8,
    pub current_ball: u8,
    pub pins_standing: u8,
    pub throw_in_progress: bool,
    pub finished: bool,
    pub frames: Vec<Frame>,
    pub total_score: u16,
}

/// Ten-frame scoresheet with its frame/ball state machine.
#[derive(Clone, Debug)]
pub struct BowlingScorer {
    rule: ScoringRule,
    frames: Vec<Frame>,
    current_frame: u8,
    current_ball: u8,
    pins_standing: u8,
    /// Balls thrown since the rack was last set.
    balls_on_rack: u8,
    throw_in_progress: bool,
    finished: bool,
}

impl Default for BowlingScorer {
    fn default() -> Self {
        Self::new(ScoringRule::default())
    }
}

impl BowlingScorer {
    /// Create a scorer at frame 1, ball 1, with all frames unset.
    #[must_use]
    pub fn new(rule: ScoringRule) -> Self {
        Self {
            rule,
            frames: fresh_frames(),
            current_frame: 1,
            current_ball: 1,
            pins_standing: PIN_COUNT,
            balls_on_rack: 0,
            throw_in_progress: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    #[must_use]
    pub fn current_frame(&self) -> u8 {
        self.current_frame
    }

    #[must_use]
    pub fn current_ball(&self) -> u8 {
        self.current_ball
    }

    /// Pins available to the next ball.
    #[must_use]
    pub fn pins_standing(&self) -> u8 {
        self.pins_standing
    }

    #[must_use]
    pub fn is_throw_in_progress(&self) -> bool {
        self.throw_in_progress
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by 1-based number.
    #[must_use]
    pub fn frame(&self, number: u8) -> Option<&Frame> {
        number
            .checked_sub(1)
            .and_then(|i| self.frames.get(i as usize))
    }

    /// Sum of every settled frame total.
    #[must_use]
    pub fn total_score(&self) -> u16 {
        self.frames.iter().filter_map(Frame::total).sum()
    }

    /// Mark a throw as started.
    ///
    /// Rejects a second start while one is still in flight, and any start
    /// once the game is over.
    pub fn begin_throw(&mut self) -> Result<(), GameError> {
        if self.finished {
            log::warn!("Throw rejected: game is over");
            return Err(GameError::GameOver);
        }
        if self.throw_in_progress {
            log::warn!("Throw rejected: frame {} ball {} still in flight", self.current_frame, self.current_ball);
            return Err(GameError::ThrowInProgress);
        }
        self.throw_in_progress = true;
        Ok(())
    }

    /// Record the pins newly knocked down by one completed throw.
    ///
    /// Validation happens before any mutation, so a rejected call leaves
    /// the scorer exactly as it was.
    pub fn record_throw(&mut self, pins: u8) -> Result<ThrowOutcome, GameError> {
        if self.finished {
            log::warn!("Throw of {} rejected: game is over", pins);
            return Err(GameError::GameOver);
        }
        if pins > self.pins_standing {
            log::warn!("Throw of {} rejected: {} pins standing", pins, self.pins_standing);
            return Err(GameError::InvalidPinCount {
                pins,
                standing: self.pins_standing,
            });
        }

        let frame = self.current_frame;
        let ball = self.current_ball;
        let index = frame as usize - 1;
        let fresh_rack = self.balls_on_rack == 0;

        self.throw_in_progress = false;
        self.pins_standing -= pins;
        self.balls_on_rack += 1;
        self.frames[index].push_roll(pins);

        let mark = match (self.pins_standing, fresh_rack) {
            (0, true) => Some(Mark::Strike),
            (0, false) => Some(Mark::Spare),
            _ => None,
        };
        log::debug!("Frame {} ball {}: {} pins ({:?})", frame, ball, pins, mark);

        let frame_complete = self.advance_ball(mark);
        if frame_complete {
            self.frames[index].mark_complete();
        }
        self.refresh_totals();

        let mut final_score = None;
        if frame_complete {
            log::info!("Frame {} complete: {:?}", frame, self.frames[index].total());

            if index + 1 == FRAME_COUNT {
                self.finished = true;
                let score = self.total_score();
                log::info!("Game over! Final score: {}", score);
                final_score = Some(score);
            } else {
                self.current_frame += 1;
                self.current_ball = 1;
                self.reset_rack();
            }
        }

        Ok(ThrowOutcome {
            frame,
            ball,
            pins,
            mark,
            frame_complete,
            final_score,
        })
    }

    /// Record a ball that left the lane without touching a pin.
    pub fn record_gutter_ball(&mut self) -> Result<ThrowOutcome, GameError> {
        self.record_throw(0)
    }

    /// Wipe the sheet and return to frame 1, ball 1.
    pub fn reset_for_new_game(&mut self) {
        *self = Self::new(self.rule);
        log::info!("New bowling game ({:?} scoring)", self.rule);
    }

    #[must_use]
    pub fn snapshot(&self) -> BowlingSnapshot {
        BowlingSnapshot {
            rule: self.rule,
            current_frame: self.current_frame,
            current_ball: self.current_ball,
            pins_standing: self.pins_standing,
            throw_in_progress: self.throw_in_progress,
            finished: self.finished,
            frames: self.frames.clone(),
            total_score: self.total_score(),
        }
    }

    /// Move to the next ball of the current frame, or report the frame done.
    fn advance_ball(&mut self, mark: Option<Mark>) -> bool {
        let tenth = self.current_frame as usize == FRAME_COUNT;

        if !(tenth && self.rule == ScoringRule::Standard) {
            if self.current_ball == 1 && mark.is_none() {
                self.current_ball = 2;
                return false;
            }
            return true;
        }

        match self.current_ball {
            1 => {
                if mark.is_some() {
                    self.reset_rack();
                }
                self.current_ball = 2;
                false
            }
            2 => {
                if mark.is_some() || self.frames[FRAME_COUNT - 1].is_strike() {
                    if self.pins_standing == 0 {
                        self.reset_rack();
                    }
                    self.current_ball = 3;
                    false
                } else {
                    true
                }
            }
            _ => true,
        }
    }

    fn reset_rack(&mut self) {
        self.pins_standing = PIN_COUNT;
        self.balls_on_rack = 0;
    }

    fn refresh_totals(&mut self) {
        let totals = frame_totals(&self.frames, self.rule);
        for (frame, total) in self.frames.iter_mut().zip(totals) {
            frame.set_total(total);
        }
    }
}

fn fresh_frames() -> Vec<Frame> {
    (1..=FRAME_COUNT as u8).map(Frame::new).collect()
}
