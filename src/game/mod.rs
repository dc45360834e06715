//! Game and match state machines.
//!
//! - `Game`: rounds of picks until one player remains
//! - `Match`: best-of-N games with a scoreboard
//! - `PickPolicy`: how robots pick

#[allow(clippy::module_inception)]
pub mod game;
pub mod policy;
pub mod match_state;

pub use game::{Game, GameStatus, RoundPhase};
pub use match_state::{start_match, Match, PickInput, RoundOutcome};
pub use policy::{PickPolicy, UniformPick};
