//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the rule catalog, the round
//! evaluator and the game state machine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, ParticipantLimits};
pub use error::{ConfigIssue, EngineError, Result};
