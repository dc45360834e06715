//! Round evaluation.
//!
//! Given a variant and the picks of every in-game player, decide which
//! selections are defeated and explain why. The evaluator is pure: it reads
//! the variant and the picks and nothing else, so evaluating the same picks
//! twice gives the same answer.
//!
//! ## Algorithm
//!
//! 1. Count picks per selection, in variant order.
//! 2. If everyone picked the same selection, or every selection of the
//!    variant was picked at least once, the round is a stalemate.
//! 3. For every ordered pair (A, B) of distinct picked selections: if B's
//!    rule beats A, A is *nullified*. Otherwise A's explanation for B (if
//!    A's rule has one) is added to A's trail.
//! 4. Every pick that was never nullified is *activated* and contributes all
//!    of its rule's contests to the eliminated list.
//! 5. No activated pick means a cycle covered every pick: play again.
//!    Otherwise the round eliminates, explained by every trail in variant
//!    order.
//!
//! Trails are gathered from nullified picks too, so with three or more
//! picked selections the explanation can mention a defeat that does not
//! decide the round.

use crate::core::{EngineError, PlayerId, Result};
use crate::rules::{Contest, Variant};
use crate::selection::Selection;

use super::result::{ResultCode, RoundEvaluation, SelectionCounts};

/// A selection picked by at least one player this round.
#[derive(Clone, Debug)]
struct ActivePick {
    selection: Selection,
    nullified: bool,
    explanations: Vec<String>,
}

/// Evaluates rounds for one variant.
#[derive(Clone, Copy, Debug)]
pub struct RoundEvaluator<'a> {
    variant: &'a Variant,
}

impl<'a> RoundEvaluator<'a> {
    #[must_use]
    pub fn new(variant: &'a Variant) -> Self {
        Self { variant }
    }

    /// Evaluate one round.
    ///
    /// `picks` holds the selection of every in-game player. Fails with
    /// `InvalidPickContext` if any pick is unresolved (`None` or `Random`)
    /// and with `UnknownSelection` if a pick is not offered by the variant.
    pub fn evaluate(&self, picks: &[(PlayerId, Selection)]) -> Result<RoundEvaluation> {
        for &(player, selection) in picks {
            if !selection.is_playable() {
                log::debug!("{} has no resolved pick ({})", player, selection);
                return Err(EngineError::InvalidPickContext(
                    "every in-game player must pick before the round is evaluated",
                ));
            }
            if !self.variant.is_valid_selection(selection) {
                return Err(EngineError::UnknownSelection(selection.name().to_string()));
            }
        }

        let counts = self.count(picks);
        let picked = counts.iter().filter(|(_, n)| *n > 0).count();

        if picked <= 1 {
            log::debug!("{}: everyone picked the same selection", self.variant);
            return Ok(RoundEvaluation::play_again(counts));
        }
        if picked == self.variant.len() {
            log::debug!("{}: every selection was picked", self.variant);
            return Ok(RoundEvaluation::play_again(counts));
        }

        let mut active: Vec<ActivePick> = counts
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|&(selection, _)| ActivePick {
                selection,
                nullified: false,
                explanations: Vec::new(),
            })
            .collect();

        self.nullify(&mut active);

        let mut eliminated: Vec<Contest> = Vec::new();
        for pick in active.iter().filter(|p| !p.nullified) {
            log::trace!("{} activated", pick.selection);
            if let Some(rule) = self.variant.get_rule(pick.selection) {
                eliminated.extend(rule.contests().iter().cloned());
            }
        }

        if eliminated.is_empty() {
            log::debug!("{}: every pick was nullified", self.variant);
            return Ok(RoundEvaluation::play_again(counts));
        }

        let explanation: Vec<String> = active.into_iter().flat_map(|p| p.explanations).collect();

        Ok(RoundEvaluation {
            code: ResultCode::Eliminate,
            counts,
            eliminated,
            explanation,
        })
    }

    fn count(&self, picks: &[(PlayerId, Selection)]) -> SelectionCounts {
        self.variant
            .possible_selections()
            .iter()
            .map(|&selection| {
                let n = picks.iter().filter(|(_, s)| *s == selection).count();
                (selection, n as u32)
            })
            .collect()
    }

    fn nullify(&self, active: &mut [ActivePick]) {
        for a in 0..active.len() {
            for b in 0..active.len() {
                if a == b {
                    continue;
                }
                let a_selection = active[a].selection;
                let b_selection = active[b].selection;

                let b_beats_a = self
                    .variant
                    .get_rule(b_selection)
                    .is_some_and(|rule| rule.beats(a_selection));

                if b_beats_a {
                    log::trace!("{} nullified by {}", a_selection, b_selection);
                    active[a].nullified = true;
                } else if let Some(line) = self
                    .variant
                    .get_rule(a_selection)
                    .and_then(|rule| rule.explanation_for(b_selection))
                {
                    active[a].explanations.push(line.to_string());
                }
            }
        }
    }
}
