//! Built-in variants.
//!
//! Each catalog is built once on first use and shared as an `Arc<Variant>`.
//! A catalog that fails to finalize is a bug in this file, so building
//! one panics rather than returning an error.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::selection::Selection::{
    self, Air, Fire, Gun, Human, Lizard, Paper, Rock, Scissors, Sponge, Spock, Water,
};

use super::rule::Rule;
use super::variant::{Variant, VariantBuilder};

/// The three shipped rule matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    /// Rock, Paper, Scissors.
    Basic,
    /// Adds Lizard and Spock.
    BigBang,
    /// Nine selections, each defeating four others.
    Xtreme,
}

static BASIC: Lazy<Arc<Variant>> = Lazy::new(|| Arc::new(built("Basic", basic())));
static BIG_BANG: Lazy<Arc<Variant>> = Lazy::new(|| Arc::new(built("Big Bang", big_bang())));
static XTREME: Lazy<Arc<Variant>> = Lazy::new(|| Arc::new(built("Xtreme", xtreme())));

impl VariantKind {
    pub const ALL: [VariantKind; 3] = [VariantKind::Basic, VariantKind::BigBang, VariantKind::Xtreme];

    /// The shared, finalized variant.
    #[must_use]
    pub fn variant(self) -> Arc<Variant> {
        match self {
            VariantKind::Basic => Arc::clone(&BASIC),
            VariantKind::BigBang => Arc::clone(&BIG_BANG),
            VariantKind::Xtreme => Arc::clone(&XTREME),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            VariantKind::Basic => "Basic",
            VariantKind::BigBang => "Big Bang",
            VariantKind::Xtreme => "Xtreme",
        }
    }

    /// Look up a kind by name. Spaces and case are ignored, so both
    /// "Big Bang" and "bigbang" match.
    #[must_use]
    pub fn by_name(name: &str) -> Option<VariantKind> {
        let wanted: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL.into_iter().find(|kind| {
            let candidate: String = kind.name().chars().filter(|c| !c.is_whitespace()).collect();
            candidate.eq_ignore_ascii_case(&wanted)
        })
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn built(name: &str, rules: Result<Vec<Rule>>) -> Variant {
    rules
        .and_then(|rules| {
            rules
                .into_iter()
                .fold(VariantBuilder::new(name), VariantBuilder::rule)
                .finalize()
        })
        .unwrap_or_else(|err| panic!("built-in variant {name} is invalid: {err}"))
}

/// `(loser, phrase)` pairs for one selection.
fn rule(selection: Selection, defeats: &[(Selection, &str)]) -> Result<Rule> {
    defeats
        .iter()
        .try_fold(Rule::new(selection)?, |rule, &(loser, phrase)| rule.defeats(loser, phrase))
}

fn basic() -> Result<Vec<Rule>> {
    Ok(vec![
        rule(Rock, &[(Scissors, "crushes")])?,
        rule(Paper, &[(Rock, "covers")])?,
        rule(Scissors, &[(Paper, "cuts")])?,
    ])
}

fn big_bang() -> Result<Vec<Rule>> {
    Ok(vec![
        rule(Rock, &[(Scissors, "crushes"), (Lizard, "crushes")])?,
        rule(Paper, &[(Rock, "covers"), (Spock, "disproves")])?,
        rule(Scissors, &[(Paper, "cuts"), (Lizard, "decapitates")])?,
        rule(Lizard, &[(Paper, "eats"), (Spock, "poisons")])?,
        rule(Spock, &[(Scissors, "smashes"), (Rock, "vaporizes")])?,
    ])
}

fn xtreme() -> Result<Vec<Rule>> {
    Ok(vec![
        rule(Rock, &[(Fire, "pounds out"), (Scissors, "crushes"), (Human, "crushes"), (Sponge, "crushes")])?,
        rule(Fire, &[(Scissors, "melts"), (Human, "burns"), (Sponge, "burns"), (Paper, "burns")])?,
        rule(Scissors, &[(Human, "cut"), (Sponge, "cut"), (Paper, "cut"), (Air, "swish through")])?,
        rule(Human, &[(Sponge, "cleans with"), (Paper, "writes on"), (Air, "breathes"), (Water, "drinks")])?,
        rule(Sponge, &[(Paper, "soaks"), (Air, "uses pockets of"), (Water, "absorbs"), (Gun, "cleans")])?,
        rule(Paper, &[(Air, "fans"), (Water, "floats on"), (Gun, "outlaws"), (Rock, "covers")])?,
        rule(Air, &[(Water, "evaporates"), (Gun, "tarnishes"), (Rock, "erodes"), (Fire, "blows out")])?,
        rule(Water, &[(Gun, "rusts"), (Rock, "erodes"), (Fire, "puts out"), (Scissors, "rusts")])?,
        rule(Gun, &[(Rock, "targets"), (Fire, "fires"), (Scissors, "outclasses"), (Human, "shoots")])?,
    ])
}
