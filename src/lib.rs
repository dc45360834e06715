//! # rps-engine
//!
//! A multi-variant rock-paper-scissors engine for any number of players.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Rules**: A variant is a validated table of contests.
//!    Basic, Big Bang and Xtreme are built in; custom variants go through
//!    [`VariantBuilder`].
//!
//! 2. **N-Player First**: Rounds with any number of picks are resolved by
//!    nullifying beaten picks and eliminating what the survivors beat.
//!
//! 3. **Presentation-Agnostic**: The engine never reads input or prints.
//!    Callers submit picks and render [`RoundOutcome`]s.
//!
//! ## Flow
//!
//! ```
//! use rps_engine::{Match, MatchConfig, ResultCode, Selection, VariantKind};
//!
//! let config = MatchConfig::new(2, 0, 1).with_seed(7);
//! let mut game = Match::start(VariantKind::BigBang.variant(), config).unwrap();
//!
//! game.submit_pick(Selection::Spock).unwrap();
//! let outcome = game.submit_pick(Selection::Scissors).unwrap();
//!
//! let result = outcome.result.unwrap();
//! assert_eq!(result.code, ResultCode::MatchOver);
//! assert_eq!(result.explanation, vec!["Spock smashes Scissors".to_string()]);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `selection`: Selections and input keys
//! - `rules`: Contests, rules, variants and the built-in catalog
//! - `round`: Round evaluation and results
//! - `game`: Game and match state machines

pub mod core;
pub mod selection;
pub mod rules;
pub mod round;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigIssue, EngineError, GameRng, GameRngState, MatchConfig, ParticipantLimits, Player,
    PlayerId, PlayerMap, Result,
};

pub use crate::selection::{resolve_key, GameKey, KeyCommand, Selection};

pub use crate::rules::{Contest, Rule, Variant, VariantBuilder, VariantKind};

pub use crate::round::{
    ResultCode, RoundData, RoundEvaluation, RoundEvaluator, RoundResult, SelectionCounts,
};

pub use crate::game::{
    start_match, Game, GameStatus, Match, PickInput, PickPolicy, RoundOutcome, RoundPhase,
    UniformPick,
};
