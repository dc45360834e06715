//! The closed set of selections a player can make.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One option a player can pick in a round.
///
/// `None` means "has not picked yet" and `Random` means "let the
/// random-selection source decide". Neither is ever evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    Random,
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
    Fire,
    Human,
    Sponge,
    Air,
    Water,
    Gun,
}

static BY_NAME: Lazy<FxHashMap<String, Selection>> = Lazy::new(|| {
    Selection::ALL
        .iter()
        .map(|&s| (s.name().to_ascii_lowercase(), s))
        .collect()
});

static BY_KEY: Lazy<FxHashMap<char, Selection>> = Lazy::new(|| {
    Selection::ALL
        .iter()
        .filter_map(|&s| s.key().map(|k| (k, s)))
        .collect()
});

impl Selection {
    /// Every selection, sentinels first, in catalog order.
    pub const ALL: [Selection; 13] = [
        Selection::None,
        Selection::Random,
        Selection::Rock,
        Selection::Paper,
        Selection::Scissors,
        Selection::Lizard,
        Selection::Spock,
        Selection::Fire,
        Selection::Human,
        Selection::Sponge,
        Selection::Air,
        Selection::Water,
        Selection::Gun,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Selection::None => "None",
            Selection::Random => "Random",
            Selection::Rock => "Rock",
            Selection::Paper => "Paper",
            Selection::Scissors => "Scissors",
            Selection::Lizard => "Lizard",
            Selection::Spock => "Spock",
            Selection::Fire => "Fire",
            Selection::Human => "Human",
            Selection::Sponge => "Sponge",
            Selection::Air => "Air",
            Selection::Water => "Water",
            Selection::Gun => "Gun",
        }
    }

    /// Input key bound to this selection, if any.
    #[must_use]
    pub const fn key(self) -> Option<char> {
        match self {
            Selection::None => None,
            Selection::Random => Some('x'),
            Selection::Rock => Some('r'),
            Selection::Paper => Some('p'),
            Selection::Scissors => Some('s'),
            Selection::Lizard => Some('l'),
            Selection::Spock => Some('v'),
            Selection::Fire => Some('f'),
            Selection::Human => Some('h'),
            Selection::Sponge => Some('o'),
            Selection::Air => Some('a'),
            Selection::Water => Some('w'),
            Selection::Gun => Some('g'),
        }
    }

    /// True for every selection that can appear in a rule.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Selection::None | Selection::Random)
    }

    /// Look up a selection by display name, ignoring case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Selection> {
        BY_NAME.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// Look up a selection by its input key, ignoring case.
    #[must_use]
    pub fn by_key(key: char) -> Option<Selection> {
        BY_KEY.get(&key.to_ascii_lowercase()).copied()
    }

    /// Whether `name` names this selection, ignoring case.
    #[must_use]
    pub fn matches_name(self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name.trim())
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Selection::by_name("Rock"), Some(Selection::Rock));
        assert_eq!(Selection::by_name("spock"), Some(Selection::Spock));
        assert_eq!(Selection::by_name(" PAPER "), Some(Selection::Paper));
        assert_eq!(Selection::by_name("Banana"), None);
    }

    #[test]
    fn test_lookup_by_key() {
        assert_eq!(Selection::by_key('r'), Some(Selection::Rock));
        assert_eq!(Selection::by_key('V'), Some(Selection::Spock));
        assert_eq!(Selection::by_key('x'), Some(Selection::Random));
        assert_eq!(Selection::by_key('z'), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<char> = Selection::ALL.iter().filter_map(|s| s.key()).collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn test_name_key_round_trip() {
        for selection in Selection::ALL {
            assert_eq!(Selection::by_name(selection.name()), Some(selection));
            if let Some(key) = selection.key() {
                assert_eq!(Selection::by_key(key), Some(selection));
            }
        }
    }

    #[test]
    fn test_sentinels_not_playable() {
        assert!(!Selection::None.is_playable());
        assert!(!Selection::Random.is_playable());
        assert!(Selection::Gun.is_playable());
        assert_eq!(Selection::default(), Selection::None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::Scissors.to_string(), "Scissors");
        assert!(Selection::Lizard.matches_name("LIZARD"));
        assert!(!Selection::Lizard.matches_name("Spock"));
    }
}
