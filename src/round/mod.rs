//! Round evaluation and round results.
//!
//! - `RoundEvaluator`: the pure decision procedure for one round
//! - `RoundEvaluation`: its output
//! - `RoundResult`: the evaluation after the game applied it to its players

pub mod evaluator;
pub mod result;

pub use evaluator::RoundEvaluator;
pub use result::{ResultCode, RoundData, RoundEvaluation, RoundResult, SelectionCounts};
