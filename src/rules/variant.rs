//! Variants: named, immutable rule matrices.
//!
//! A `Variant` is assembled with a `VariantBuilder` and validated once by
//! [`VariantBuilder::finalize`]. After that it exposes lookups only, so it
//! can be shared between any number of games behind an `Arc`.

use crate::core::{EngineError, GameRng, Result};
use crate::selection::Selection;

use super::rule::Rule;

/// Collects rules for a variant until `finalize` validates them.
#[derive(Clone, Debug, Default)]
pub struct VariantBuilder {
    name: String,
    rules: Vec<Rule>,
}

impl VariantBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule. Order is significant: it becomes the variant's
    /// canonical selection order.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validate and freeze the variant.
    ///
    /// Fails on the first selection that heads a second rule.
    pub fn finalize(self) -> Result<Variant> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::MissingArgument("name"));
        }
        if self.rules.is_empty() {
            return Err(EngineError::MissingArgument("rules"));
        }

        let mut possible_selections: Vec<Selection> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let selection = rule.selection();
            if possible_selections.contains(&selection) {
                return Err(EngineError::DuplicateRule(selection));
            }
            for loser in rule.repeated_losers() {
                log::warn!(
                    "variant {}: rule for {} lists {} more than once; the first explanation is used",
                    name,
                    selection,
                    loser
                );
            }
            possible_selections.push(selection);
        }

        log::debug!("variant {} finalized with {} selections", name, possible_selections.len());

        Ok(Variant {
            name: name.to_string(),
            rules: self.rules,
            possible_selections,
        })
    }
}

/// A finalized rule matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    name: String,
    rules: Vec<Rule>,
    possible_selections: Vec<Selection>,
}

impl Variant {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Playable selections, in rule order.
    #[must_use]
    pub fn possible_selections(&self) -> &[Selection] {
        &self.possible_selections
    }

    /// Number of playable selections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.possible_selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.possible_selections.is_empty()
    }

    /// The rule headed by `selection`, or `None` if this variant does not
    /// offer it.
    #[must_use]
    pub fn get_rule(&self, selection: Selection) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selection() == selection)
    }

    #[must_use]
    pub fn get_rule_by_name(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selection().matches_name(name))
    }

    #[must_use]
    pub fn is_valid_selection(&self, selection: Selection) -> bool {
        self.possible_selections.contains(&selection)
    }

    /// Whether `key` picks a selection offered by this variant.
    #[must_use]
    pub fn is_valid_key(&self, key: char) -> bool {
        self.selection_for_key(key).is_some()
    }

    /// The playable selection bound to `key` in this variant.
    #[must_use]
    pub fn selection_for_key(&self, key: char) -> Option<Selection> {
        Selection::by_key(key).filter(|s| self.is_valid_selection(*s))
    }

    /// Uniformly random playable selection.
    pub fn random_selection(&self, rng: &mut GameRng) -> Selection {
        // finalize() guarantees at least one rule
        rng.choose(&self.possible_selections)
            .copied()
            .unwrap_or(self.possible_selections[0])
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
