//! Pick policies for robot participants.
//!
//! The match asks its policy for a robot's pick as soon as the robot's turn
//! comes up, so robots never suspend a round.

use crate::core::{GameRng, Player};
use crate::rules::Variant;
use crate::selection::Selection;

/// Chooses a pick for a robot.
///
/// Returning `Selection::Random`, or any selection the variant does not
/// offer, defers to a uniform draw.
pub trait PickPolicy: Send + Sync {
    fn choose(&self, variant: &Variant, player: &Player, rng: &mut GameRng) -> Selection;
}

/// Uniformly random pick among the variant's selections.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPick;

impl PickPolicy for UniformPick {
    fn choose(&self, variant: &Variant, _player: &Player, rng: &mut GameRng) -> Selection {
        variant.random_selection(rng)
    }
}
