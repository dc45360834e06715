//! Round outputs.
//!
//! ## RoundEvaluation
//!
//! What the evaluator decides from the picks alone: counts, eliminated
//! contests and the explanation trail.
//!
//! ## RoundResult
//!
//! What the game reports after applying an evaluation to its players:
//! who was eliminated, or who won.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::Contest;
use crate::selection::Selection;

/// Outcome class of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    /// Nobody is eliminated; pick again.
    PlayAgain,
    /// Some players were eliminated and more than one remains.
    Eliminate,
    /// Exactly one player remains; the game is over.
    Winner,
    /// The game winner also won the match.
    MatchOver,
}

impl ResultCode {
    /// Whether the game ended with this round.
    #[must_use]
    pub fn ends_game(self) -> bool {
        matches!(self, ResultCode::Winner | ResultCode::MatchOver)
    }
}

/// Per-selection pick counts, in the variant's selection order.
pub type SelectionCounts = Vec<(Selection, u32)>;

/// Pure evaluator output. Never `Winner` or `MatchOver`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEvaluation {
    pub code: ResultCode,
    pub counts: SelectionCounts,
    /// Every contest of every activated pick, in activation order.
    pub eliminated: Vec<Contest>,
    pub explanation: Vec<String>,
}

impl RoundEvaluation {
    pub(crate) fn play_again(counts: SelectionCounts) -> Self {
        Self {
            code: ResultCode::PlayAgain,
            counts,
            eliminated: Vec::new(),
            explanation: Vec::new(),
        }
    }

    /// How many players picked `selection`.
    #[must_use]
    pub fn count_of(&self, selection: Selection) -> u32 {
        self.counts
            .iter()
            .find(|(s, _)| *s == selection)
            .map_or(0, |(_, n)| *n)
    }

    /// Picked selections that lost, without repeats, in contest order.
    #[must_use]
    pub fn eliminated_selections(&self) -> Vec<Selection> {
        let mut losers = Vec::new();
        for contest in &self.eliminated {
            let loser = contest.loser();
            if self.count_of(loser) > 0 && !losers.contains(&loser) {
                losers.push(loser);
            }
        }
        losers
    }
}

/// Result-specific payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundData {
    #[default]
    None,
    /// Players knocked out this round, in index order.
    Eliminated(Vec<PlayerId>),
    /// The last player standing.
    Winner(PlayerId),
}

/// A resolved round, as reported to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub code: ResultCode,
    /// Zero-based round number within the game.
    pub round_number: u32,
    /// Picks of the players that took part, in index order.
    pub player_selections: Vec<(PlayerId, Selection)>,
    pub counts: SelectionCounts,
    pub eliminated_contests: Vec<Contest>,
    pub data: RoundData,
    pub explanation: Vec<String>,
}

impl RoundResult {
    /// The winner, for `Winner` and `MatchOver` results.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.data {
            RoundData::Winner(player) => Some(player),
            _ => None,
        }
    }

    /// Players eliminated this round. A winning round lists none.
    #[must_use]
    pub fn eliminated_players(&self) -> &[PlayerId] {
        match &self.data {
            RoundData::Eliminated(players) => players,
            _ => &[],
        }
    }

    /// What `player` picked this round, if they took part.
    #[must_use]
    pub fn selection_of(&self, player: PlayerId) -> Option<Selection> {
        self.player_selections
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, s)| *s)
    }
}
