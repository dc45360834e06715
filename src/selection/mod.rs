//! Selection and key catalog.
//!
//! - `Selection`: every pick that exists in any variant, plus the `None` and
//!   `Random` sentinels
//! - `GameKey` / `KeyCommand`: control keys and key-press resolution

#[allow(clippy::module_inception)]
mod selection;
mod key;

pub use key::{resolve_key, GameKey, KeyCommand};
pub use selection::Selection;
