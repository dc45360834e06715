//! Input key bindings.
//!
//! A single key press resolves to a selection, a control command, or
//! nothing at all. Unknown keys are never an error.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Selection;

/// Control commands the presentation layer binds to keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKey {
    /// Acknowledge a result and move on.
    Continue,
    /// Start a fresh match with the same participants.
    NewMatch,
    Quit,
}

impl GameKey {
    pub const ALL: [GameKey; 3] = [GameKey::Continue, GameKey::NewMatch, GameKey::Quit];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKey::Continue => "Continue",
            GameKey::NewMatch => "New Match",
            GameKey::Quit => "Quit",
        }
    }

    #[must_use]
    pub const fn key(self) -> char {
        match self {
            GameKey::Continue => ' ',
            GameKey::NewMatch => 'n',
            GameKey::Quit => 'q',
        }
    }
}

/// What a key press means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCommand {
    Select(Selection),
    Control(GameKey),
    /// The key is not bound.
    Ignore,
}

static CONTROL_KEYS: Lazy<FxHashMap<char, GameKey>> =
    Lazy::new(|| GameKey::ALL.iter().map(|&k| (k.key(), k)).collect());

/// Resolve a key press.
///
/// ```
/// use rps_engine::selection::{resolve_key, GameKey, KeyCommand, Selection};
///
/// assert_eq!(resolve_key('P'), KeyCommand::Select(Selection::Paper));
/// assert_eq!(resolve_key('q'), KeyCommand::Control(GameKey::Quit));
/// assert_eq!(resolve_key('#'), KeyCommand::Ignore);
/// ```
#[must_use]
pub fn resolve_key(key: char) -> KeyCommand {
    if let Some(selection) = Selection::by_key(key) {
        return KeyCommand::Select(selection);
    }
    match CONTROL_KEYS.get(&key.to_ascii_lowercase()) {
        Some(&control) => KeyCommand::Control(control),
        None => KeyCommand::Ignore,
    }
}
