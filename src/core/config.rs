//! Match configuration.
//!
//! The presentation layer builds a `MatchConfig` from user input and the
//! engine validates it before a match starts. Validation reports every
//! problem at once so the user can fix them together.

use serde::{Deserialize, Serialize};

use super::error::{ConfigIssue, EngineError, Result};

/// Bounds on how many participants a match may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantLimits {
    /// Minimum total participants (humans + robots). Never below 2.
    pub min_players: usize,
    /// Maximum total participants (humans + robots). Never above 255.
    pub max_players: usize,
    /// Maximum robots.
    pub max_robots: usize,
}

impl Default for ParticipantLimits {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 10,
            max_robots: 9,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Human participants, registered first.
    pub human_count: usize,

    /// Robot participants, registered after the humans.
    pub robot_count: usize,

    /// Number of games in the match. Must be odd.
    pub best_of: u32,

    /// Seed for the random-selection source.
    /// Same seed and same human picks produce the same match.
    pub seed: u64,

    /// Participant bounds.
    pub limits: ParticipantLimits,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            human_count: 1,
            robot_count: 1,
            best_of: 3,
            seed: 42,
            limits: ParticipantLimits::default(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration with a fresh random seed.
    #[must_use]
    pub fn new(human_count: usize, robot_count: usize, best_of: u32) -> Self {
        Self {
            human_count,
            robot_count,
            best_of,
            seed: rand::random(),
            limits: ParticipantLimits::default(),
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the participant bounds.
    #[must_use]
    pub fn with_limits(mut self, limits: ParticipantLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Total participants. Saturates instead of overflowing.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.human_count.saturating_add(self.robot_count)
    }

    /// Game wins needed to take the match.
    #[must_use]
    pub fn wins_needed(&self) -> u32 {
        self.best_of / 2 + 1
    }

    /// Collect every problem with this configuration.
    #[must_use]
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let total = self.player_count();
        // A game needs someone to eliminate.
        let min_players = self.limits.min_players.max(2);
        let max_players = self.limits.max_players.min(255);

        if total < min_players {
            issues.push(ConfigIssue::InsufficientParticipants {
                found: total,
                min: min_players,
            });
        }
        if total > max_players {
            issues.push(ConfigIssue::TooManyParticipants {
                found: total,
                max: max_players,
            });
        }
        if self.robot_count > self.limits.max_robots {
            issues.push(ConfigIssue::TooManyRobots {
                found: self.robot_count,
                max: self.limits.max_robots,
            });
        }
        if self.best_of == 0 || self.best_of % 2 == 0 {
            issues.push(ConfigIssue::InvalidBestOf(self.best_of));
        }

        issues
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(EngineError::InvalidConfiguration(issues))
        }
    }
}
