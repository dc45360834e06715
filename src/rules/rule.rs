//! Everything one selection defeats.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::contest::Contest;
use crate::core::{EngineError, Result};
use crate::selection::Selection;

/// All contests won by one selection, in insertion order.
///
/// Insertion order decides which explanation is reported when a rule
/// lists the same loser twice: lookups return the first match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    selection: Selection,
    /// Shipped variants have at most four contests per rule.
    contests: SmallVec<[Contest; 4]>,
}

impl Rule {
    /// Create an empty rule for `selection`.
    pub fn new(selection: Selection) -> Result<Self> {
        if !selection.is_playable() {
            return Err(EngineError::MissingArgument("selection"));
        }
        Ok(Self {
            selection,
            contests: SmallVec::new(),
        })
    }

    /// Builder form of [`Rule::add_contest`] for "selection <phrase> loser".
    ///
    /// ```
    /// use rps_engine::rules::Rule;
    /// use rps_engine::selection::Selection;
    ///
    /// let rock = Rule::new(Selection::Rock)
    ///     .and_then(|r| r.defeats(Selection::Scissors, "crushes"))
    ///     .unwrap();
    /// assert!(rock.beats(Selection::Scissors));
    /// ```
    pub fn defeats(mut self, loser: Selection, phrase: &str) -> Result<Self> {
        let contest = Contest::with_phrase(self.selection, loser, phrase)?;
        self.contests.push(contest);
        Ok(self)
    }

    /// Append a contest. Its winner must be this rule's selection.
    pub fn add_contest(&mut self, contest: Contest) -> Result<()> {
        if contest.winner() != self.selection {
            return Err(EngineError::MismatchedContest {
                rule: self.selection,
                winner: contest.winner(),
            });
        }
        self.contests.push(contest);
        Ok(())
    }

    /// Append several contests, or none of them if any has a foreign winner.
    pub fn add_contests(&mut self, contests: impl IntoIterator<Item = Contest>) -> Result<()> {
        let contests: SmallVec<[Contest; 4]> = contests.into_iter().collect();
        if let Some(foreign) = contests.iter().find(|c| c.winner() != self.selection) {
            return Err(EngineError::MismatchedContest {
                rule: self.selection,
                winner: foreign.winner(),
            });
        }
        self.contests.extend(contests);
        Ok(())
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn contests(&self) -> &[Contest] {
        &self.contests
    }

    /// Selections this rule defeats, in contest order.
    pub fn losers(&self) -> impl Iterator<Item = Selection> + '_ {
        self.contests.iter().map(Contest::loser)
    }

    #[must_use]
    pub fn beats(&self, candidate: Selection) -> bool {
        self.contest_against(candidate).is_some()
    }

    /// Like [`Rule::beats`], matching the candidate by display name.
    #[must_use]
    pub fn beats_name(&self, candidate: &str) -> bool {
        self.contests.iter().any(|c| c.loser().matches_name(candidate))
    }

    /// The first contest this rule wins against `candidate`.
    #[must_use]
    pub fn contest_against(&self, candidate: Selection) -> Option<&Contest> {
        self.contests.iter().find(|c| c.loser() == candidate)
    }

    #[must_use]
    pub fn explanation_for(&self, candidate: Selection) -> Option<&str> {
        self.contest_against(candidate).map(Contest::explanation)
    }

    #[must_use]
    pub fn explanation_for_name(&self, candidate: &str) -> Option<&str> {
        self.contests
            .iter()
            .find(|c| c.loser().matches_name(candidate))
            .map(Contest::explanation)
    }

    /// Losers listed by more than one contest.
    pub(crate) fn repeated_losers(&self) -> Vec<Selection> {
        let mut repeated = Vec::new();
        for (i, contest) in self.contests.iter().enumerate() {
            let loser = contest.loser();
            if self.contests[..i].iter().any(|c| c.loser() == loser) && !repeated.contains(&loser) {
                repeated.push(loser);
            }
        }
        repeated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spock() -> Rule {
        Rule::new(Selection::Spock)
            .and_then(|r| r.defeats(Selection::Scissors, "smashes"))
            .and_then(|r| r.defeats(Selection::Rock, "vaporizes"))
            .unwrap()
    }

    #[test]
    fn test_beats() {
        let rule = spock();
        assert!(rule.beats(Selection::Scissors));
        assert!(rule.beats(Selection::Rock));
        assert!(!rule.beats(Selection::Paper));
        assert!(!rule.beats(Selection::Spock));
    }

    #[test]
    fn test_beats_name() {
        let rule = spock();
        assert!(rule.beats_name("rock"));
        assert!(rule.beats_name("Scissors"));
        assert!(!rule.beats_name("Lizard"));
        assert!(!rule.beats_name(""));
    }

    #[test]
    fn test_explanations() {
        let rule = spock();
        assert_eq!(rule.explanation_for(Selection::Rock), Some("Spock vaporizes Rock"));
        assert_eq!(rule.explanation_for_name("SCISSORS"), Some("Spock smashes Scissors"));
        assert_eq!(rule.explanation_for(Selection::Paper), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let losers: Vec<_> = spock().losers().collect();
        assert_eq!(losers, vec![Selection::Scissors, Selection::Rock]);
    }

    #[test]
    fn test_add_contest_rejects_foreign_winner() {
        let mut rule = Rule::new(Selection::Rock).unwrap();
        let contest = Contest::new(Selection::Paper, Selection::Rock).unwrap();

        assert_eq!(
            rule.add_contest(contest),
            Err(EngineError::MismatchedContest {
                rule: Selection::Rock,
                winner: Selection::Paper,
            })
        );
        assert!(rule.contests().is_empty());
    }

    #[test]
    fn test_add_contests() {
        let mut rule = Rule::new(Selection::Lizard).unwrap();
        rule.add_contests([
            Contest::with_phrase(Selection::Lizard, Selection::Spock, "poisons").unwrap(),
            Contest::with_phrase(Selection::Lizard, Selection::Paper, "eats").unwrap(),
        ])
        .unwrap();

        assert_eq!(rule.contests().len(), 2);
        assert!(rule.beats(Selection::Paper));
    }

    #[test]
    fn test_add_contests_is_all_or_nothing() {
        let mut rule = Rule::new(Selection::Lizard).unwrap();
        let err = rule
            .add_contests([
                Contest::with_phrase(Selection::Lizard, Selection::Spock, "poisons").unwrap(),
                Contest::new(Selection::Rock, Selection::Lizard).unwrap(),
            ])
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::MismatchedContest {
                rule: Selection::Lizard,
                winner: Selection::Rock,
            }
        );
        assert!(rule.contests().is_empty());
    }

    #[test]
    fn test_duplicate_loser_is_permitted_first_wins() {
        let rule = Rule::new(Selection::Rock)
            .and_then(|r| r.defeats(Selection::Scissors, "crushes"))
            .and_then(|r| r.defeats(Selection::Scissors, "blunts"))
            .unwrap();

        assert_eq!(rule.contests().len(), 2);
        assert_eq!(rule.explanation_for(Selection::Scissors), Some("Rock crushes Scissors"));
        assert_eq!(rule.repeated_losers(), vec![Selection::Scissors]);
    }

    #[test]
    fn test_sentinel_rule_rejected() {
        assert_eq!(
            Rule::new(Selection::None),
            Err(EngineError::MissingArgument("selection"))
        );
    }
}
