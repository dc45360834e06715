//! Rule catalog and custom variant tests.

use rps_engine::rules::{Contest, Rule, VariantBuilder, VariantKind};
use rps_engine::{EngineError, GameRng, Selection};

/// Every built-in variant decides every pair of distinct selections exactly once.
#[test]
fn test_builtin_variants_are_tournaments() {
    for kind in VariantKind::ALL {
        let variant = kind.variant();
        let n = variant.len();

        let contests: usize = variant.rules().iter().map(|r| r.contests().len()).sum();
        assert_eq!(contests, n * (n - 1) / 2, "{kind}");

        for rule in variant.rules() {
            assert_eq!(rule.contests().len(), (n - 1) / 2, "{kind}: {}", rule.selection());
            for contest in rule.contests() {
                assert_eq!(contest.winner(), rule.selection());
                assert!(variant.is_valid_selection(contest.loser()));
            }
        }
    }
}

#[test]
fn test_variant_lookup_by_name() {
    assert_eq!(VariantKind::by_name("big bang"), Some(VariantKind::BigBang));
    assert_eq!(VariantKind::by_name("BIGBANG"), Some(VariantKind::BigBang));
    assert_eq!(VariantKind::by_name("xtreme"), Some(VariantKind::Xtreme));
    assert_eq!(VariantKind::by_name("Lizard"), None);
}

#[test]
fn test_xtreme_wording() {
    let variant = VariantKind::Xtreme.variant();
    let water = variant.get_rule_by_name("water").unwrap();

    assert_eq!(water.explanation_for(Selection::Fire), Some("Water puts out Fire"));
    assert_eq!(water.explanation_for_name("GUN"), Some("Water rusts Gun"));
    assert!(!water.beats(Selection::Paper));
}

#[test]
fn test_keys_map_to_variant_selections() {
    let basic = VariantKind::Basic.variant();
    assert_eq!(basic.selection_for_key('s'), Some(Selection::Scissors));
    assert_eq!(basic.selection_for_key('l'), None);
    assert!(!basic.is_valid_key('v'));

    let big_bang = VariantKind::BigBang.variant();
    assert!(big_bang.is_valid_key('v'));
    assert!(big_bang.is_valid_key('L'));
}

#[test]
fn test_random_selection_stays_in_variant() {
    let variant = VariantKind::BigBang.variant();
    let mut rng = GameRng::new(2024);

    let mut seen = Vec::new();
    for _ in 0..200 {
        let pick = variant.random_selection(&mut rng);
        assert!(variant.is_valid_selection(pick));
        if !seen.contains(&pick) {
            seen.push(pick);
        }
    }
    assert_eq!(seen.len(), variant.len());
}

/// A custom three-way variant assembled from templates.
#[test]
fn test_custom_variant() {
    let bear = Rule::new(Selection::Rock)
        .and_then(|r| r.defeats(Selection::Scissors, "mauls"))
        .unwrap();
    let mut hunter = Rule::new(Selection::Human).unwrap();
    hunter
        .add_contest(Contest::from_template(Selection::Human, Selection::Rock, "{winner} traps the {loser}").unwrap())
        .unwrap();
    let ninja = Rule::new(Selection::Scissors)
        .and_then(|r| r.defeats(Selection::Human, ""))
        .unwrap();

    let variant = VariantBuilder::new("  Bear Hunter Ninja ")
        .rule(bear)
        .rule(hunter)
        .rule(ninja)
        .finalize()
        .unwrap();

    assert_eq!(variant.name(), "Bear Hunter Ninja");
    assert_eq!(
        variant.possible_selections(),
        &[Selection::Rock, Selection::Human, Selection::Scissors]
    );
    assert_eq!(
        variant.get_rule(Selection::Human).unwrap().explanation_for(Selection::Rock),
        Some("Human traps the Rock")
    );
    assert_eq!(
        variant.get_rule(Selection::Scissors).unwrap().explanation_for(Selection::Human),
        Some("Scissors beats Human")
    );
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Contest::new(Selection::None, Selection::Rock).unwrap_err(),
        EngineError::MissingArgument("winner")
    );
    assert_eq!(
        Contest::new(Selection::Rock, Selection::Random).unwrap_err(),
        EngineError::MissingArgument("loser")
    );
    assert_eq!(
        Contest::new(Selection::Rock, Selection::Rock).unwrap_err(),
        EngineError::InvalidContest(Selection::Rock)
    );

    let mut rock = Rule::new(Selection::Rock).unwrap();
    let foreign = Contest::new(Selection::Paper, Selection::Rock).unwrap();
    assert_eq!(
        rock.add_contest(foreign).unwrap_err(),
        EngineError::MismatchedContest {
            rule: Selection::Rock,
            winner: Selection::Paper,
        }
    );

    assert_eq!(
        VariantBuilder::new("Empty").finalize().unwrap_err(),
        EngineError::MissingArgument("rules")
    );
    assert_eq!(
        VariantBuilder::new(" ").rule(rock.clone()).finalize().unwrap_err(),
        EngineError::MissingArgument("name")
    );

    let err = VariantBuilder::new("Twice")
        .rule(rock.clone())
        .rule(rock)
        .finalize()
        .unwrap_err();
    assert_eq!(err.to_string(), "Rule already exists for Rock");
    assert!(!err.is_recoverable());
}

/// A rule may list the same loser twice; the first explanation wins.
#[test]
fn test_repeated_loser_uses_first_explanation() {
    let rule = Rule::new(Selection::Rock)
        .and_then(|r| r.defeats(Selection::Scissors, "crushes"))
        .and_then(|r| r.defeats(Selection::Scissors, "blunts"))
        .unwrap();
    let variant = VariantBuilder::new("Lopsided")
        .rule(rule)
        .rule(Rule::new(Selection::Scissors).unwrap())
        .finalize()
        .unwrap();

    let rock = variant.get_rule(Selection::Rock).unwrap();
    assert_eq!(rock.contests().len(), 2);
    assert_eq!(rock.explanation_for(Selection::Scissors), Some("Rock crushes Scissors"));
}
