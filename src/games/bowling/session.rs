//! Multi-bowler session.
//!
//! A session seats the roster of a [`GameMode`] and gives each bowler a
//! [`BowlingScorer`]. Bowlers take whole frames in turn: once the active
//! bowler completes a frame, the next seat is up.

use serde::{Deserialize, Serialize};

use crate::core::{BowlingConfig, GameError, GameMode, PlayerId, PlayerMap};

use super::scorer::{BowlingScorer, ThrowOutcome};

/// Result of a completed session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top score.
    Winner(PlayerId),
    /// Several bowlers share the top score.
    Winners(Vec<PlayerId>),
    /// Every bowler finished level.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: u16,
}

/// Bowling session for one to four bowlers.
#[derive(Clone, Debug)]
pub struct BowlingSession {
    config: BowlingConfig,
    names: PlayerMap<String>,
    sheets: PlayerMap<BowlingScorer>,
    active: PlayerId,
}

impl BowlingSession {
    #[must_use]
    pub fn new(config: BowlingConfig) -> Self {
        let roster = config.mode.roster();
        let names = PlayerMap::new(roster.len(), |p| roster[p.index()].to_string());
        let sheets = PlayerMap::with_value(roster.len(), BowlingScorer::new(config.rule));

        log::info!("Bowling session: {:?} with {} bowler(s)", config.mode, roster.len());

        Self {
            config,
            names,
            sheets,
            active: PlayerId::new(0),
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.sheets.player_count()
    }

    /// Bowler whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    #[must_use]
    pub fn scorer(&self, player: PlayerId) -> &BowlingScorer {
        &self.sheets[player]
    }

    /// Start a throw for the active bowler.
    pub fn begin_throw(&mut self) -> Result<(), GameError> {
        self.sheets[self.active].begin_throw()
    }

    /// Record a throw for the active bowler and rotate on frame completion.
    pub fn record_throw(&mut self, pins: u8) -> Result<ThrowOutcome, GameError> {
        let outcome = self.sheets[self.active].record_throw(pins)?;

        if outcome.frame_complete {
            let next = self.active.next(self.player_count());
            if !self.sheets[next].is_finished() {
                self.active = next;
                log::info!("{} is up", self.names[next]);
            }
        }

        Ok(outcome)
    }

    /// Every bowler has completed the tenth frame.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sheets.iter().all(|(_, sheet)| sheet.is_finished())
    }

    /// Leaderboard, highest score first; ties keep lane order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .sheets
            .iter()
            .map(|(player, sheet)| Standing {
                player,
                name: self.names[player].clone(),
                score: sheet.total_score(),
            })
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    /// Final result, once every bowler has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_finished() {
            return None;
        }

        let standings = self.standings();
        let top = standings.first()?.score;
        let leaders: Vec<PlayerId> = standings
            .iter()
            .filter(|s| s.score == top)
            .map(|s| s.player)
            .collect();

        Some(match leaders.len() {
            1 => GameResult::Winner(leaders[0]),
            n if n == standings.len() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        })
    }

    /// Clear every sheet and hand the lane back to the first bowler.
    pub fn reset_for_new_game(&mut self) {
        for (_, sheet) in self.sheets.iter_mut() {
            sheet.reset_for_new_game();
        }
        self.active = PlayerId::new(0);
    }
}
