//! Rule matrices.
//!
//! - `Contest`: one directed "A defeats B" fact with its explanation
//! - `Rule`: every contest one selection wins
//! - `Variant`: a named, validated, immutable set of rules
//! - `VariantKind`: the built-in Basic, Big Bang and Xtreme catalogs

pub mod contest;
pub mod rule;
pub mod variant;
pub mod catalog;

pub use catalog::VariantKind;
pub use contest::{Contest, DEFAULT_PHRASE, LOSER_TOKEN, WINNER_TOKEN};
pub use rule::Rule;
pub use variant::{Variant, VariantBuilder};
