//! A single directed defeat: "winner defeats loser, because ...".

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};
use crate::selection::Selection;

/// Placeholder replaced by the winner's name in an explanation template.
pub const WINNER_TOKEN: &str = "{winner}";
/// Placeholder replaced by the loser's name in an explanation template.
pub const LOSER_TOKEN: &str = "{loser}";
/// Connecting phrase used when none is supplied.
pub const DEFAULT_PHRASE: &str = "beats";

/// One directed "A defeats B" fact with its explanation.
///
/// The explanation is rendered once at construction.
///
/// ```
/// use rps_engine::rules::Contest;
/// use rps_engine::selection::Selection;
///
/// let contest = Contest::with_phrase(Selection::Rock, Selection::Scissors, "crushes").unwrap();
/// assert_eq!(contest.explanation(), "Rock crushes Scissors");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contest {
    winner: Selection,
    loser: Selection,
    explanation: String,
}

impl Contest {
    /// "winner beats loser".
    pub fn new(winner: Selection, loser: Selection) -> Result<Self> {
        Self::with_phrase(winner, loser, DEFAULT_PHRASE)
    }

    /// "winner <phrase> loser". An empty phrase falls back to "beats".
    pub fn with_phrase(winner: Selection, loser: Selection, phrase: &str) -> Result<Self> {
        let phrase = match phrase.trim() {
            "" => DEFAULT_PHRASE,
            trimmed => trimmed,
        };
        Self::from_template(winner, loser, &format!("{WINNER_TOKEN} {phrase} {LOSER_TOKEN}"))
    }

    /// Render a free-form template containing `{winner}` and `{loser}`.
    pub fn from_template(winner: Selection, loser: Selection, template: &str) -> Result<Self> {
        if !winner.is_playable() {
            return Err(EngineError::MissingArgument("winner"));
        }
        if !loser.is_playable() {
            return Err(EngineError::MissingArgument("loser"));
        }
        if winner == loser {
            return Err(EngineError::InvalidContest(winner));
        }

        let explanation = template
            .replace(WINNER_TOKEN, winner.name())
            .replace(LOSER_TOKEN, loser.name());

        Ok(Self {
            winner,
            loser,
            explanation,
        })
    }

    #[must_use]
    pub fn winner(&self) -> Selection {
        self.winner
    }

    #[must_use]
    pub fn loser(&self) -> Selection {
        self.loser
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl std::fmt::Display for Contest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.explanation)
    }
}
