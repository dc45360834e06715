//! Engine error taxonomy.
//!
//! Every fallible operation returns [`Result`]. Construction errors
//! (`MissingArgument`, `InvalidContest`, `MismatchedContest`, `DuplicateRule`)
//! indicate a broken catalog and are fatal. Configuration and pick errors are
//! recoverable: the offending call is rejected and state is left untouched.

use thiserror::Error;

use crate::selection::Selection;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// A single problem found while validating a [`MatchConfig`](super::MatchConfig).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("At least {min} players are required, but only {found} were configured")]
    InsufficientParticipants { found: usize, min: usize },

    #[error("At most {max} players are allowed, but {found} were configured")]
    TooManyParticipants { found: usize, max: usize },

    #[error("At most {max} robots are allowed, but {found} were configured")]
    TooManyRobots { found: usize, max: usize },

    #[error("Best of {0} is not valid: the number of games must be odd and at least 1")]
    InvalidBestOf(u32),
}

/// Errors raised by the engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("A selection cannot defeat itself: {0}")]
    InvalidContest(Selection),

    #[error("Contest won by {winner} does not belong to the rule for {rule}")]
    MismatchedContest { rule: Selection, winner: Selection },

    #[error("Rule already exists for {0}")]
    DuplicateRule(Selection),

    #[error("Invalid match configuration: {}", join_issues(.0))]
    InvalidConfiguration(Vec<ConfigIssue>),

    #[error("Unknown selection: {0}")]
    UnknownSelection(String),

    #[error("Pick rejected: {0}")]
    InvalidPickContext(&'static str),

    #[error("Out of sequence: {0}")]
    OutOfSequence(&'static str),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl EngineError {
    /// Whether the caller can correct its input and try again.
    ///
    /// Construction errors mean the rule catalog itself is wrong.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::MissingArgument(_)
            | EngineError::InvalidContest(_)
            | EngineError::MismatchedContest { .. }
            | EngineError::DuplicateRule(_) => false,
            EngineError::InvalidConfiguration(_)
            | EngineError::UnknownSelection(_)
            | EngineError::InvalidPickContext(_)
            | EngineError::OutOfSequence(_) => true,
        }
    }

    /// Human-readable messages for the presentation layer.
    ///
    /// Configuration errors expand to one message per issue.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            EngineError::InvalidConfiguration(issues) => {
                issues.iter().map(ToString::to_string).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_rule_message() {
        let err = EngineError::DuplicateRule(Selection::Rock);
        assert_eq!(err.to_string(), "Rule already exists for Rock");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_configuration_messages() {
        let err = EngineError::InvalidConfiguration(vec![
            ConfigIssue::InsufficientParticipants { found: 1, min: 2 },
            ConfigIssue::InvalidBestOf(4),
        ]);

        let messages = err.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("At least 2 players"));
        assert!(messages[1].contains("Best of 4"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_pick_errors_are_recoverable() {
        assert!(EngineError::UnknownSelection("Banana".into()).is_recoverable());
        assert!(EngineError::InvalidPickContext("no round").is_recoverable());
        assert!(!EngineError::MissingArgument("winner").is_recoverable());
    }
}
