//! Game configuration.
//!
//! - `BowlingConfig`: roster mode and scoring rule
//! - `StoplightConfig`: opponent seed
//!
//! Both use `with_*` builders over a sensible `Default`.

use serde::{Deserialize, Serialize};

/// How frame totals are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Each frame scores its own pins. No strike or spare bonus, and the
    /// tenth frame never grants a third ball.
    #[default]
    Simplified,
    /// Ten-pin rules: a strike adds the next two balls, a spare the next
    /// ball, and a mark in the tenth frame earns a third ball.
    Standard,
}

/// Roster shape for a bowling session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Singles,
    Doubles,
    Team,
}

impl GameMode {
    /// Bowler names in lane order.
    #[must_use]
    pub fn roster(self) -> &'static [&'static str] {
        match self {
            GameMode::Singles => &["Player 1"],
            GameMode::Doubles => &["Athlete", "Partner"],
            GameMode::Team => &["Athlete 1", "Athlete 2", "Partner 1", "Partner 2"],
        }
    }

    #[must_use]
    pub fn player_count(self) -> usize {
        self.roster().len()
    }
}

/// Bowling configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingConfig {
    pub mode: GameMode,
    pub rule: ScoringRule,
}

impl BowlingConfig {
    /// Set the roster mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the scoring rule.
    #[must_use]
    pub fn with_rule(mut self, rule: ScoringRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Stoplight configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoplightConfig {
    /// Seed for the computer opponent.
    /// Same seed produces the same sequence of computer choices.
    pub seed: u64,
}

impl Default for StoplightConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl StoplightConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rosters() {
        assert_eq!(GameMode::Singles.roster(), &["Player 1"]);
        assert_eq!(GameMode::Doubles.player_count(), 2);
        assert_eq!(GameMode::Team.roster()[2], "Partner 1");
        assert_eq!(GameMode::Team.player_count(), 4);
    }

    #[test]
    fn test_bowling_defaults() {
        let config = BowlingConfig::default();
        assert_eq!(config.mode, GameMode::Singles);
        assert_eq!(config.rule, ScoringRule::Simplified);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BowlingConfig::default()
            .with_mode(GameMode::Doubles)
            .with_rule(ScoringRule::Standard);
        assert_eq!(config.mode, GameMode::Doubles);
        assert_eq!(config.rule, ScoringRule::Standard);

        let stoplight = StoplightConfig::default().with_seed(7);
        assert_eq!(stoplight.seed, 7);
        assert_eq!(StoplightConfig::default().seed, 42);
    }

    #[test]
    fn test_serialization() {
        let config = BowlingConfig::default().with_mode(GameMode::Team);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BowlingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
