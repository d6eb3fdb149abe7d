//! Error type shared by every part of the solver.

use thiserror::Error;

/// Errors reported by the solver and the corpus loader.
///
/// None of these are fatal: the solver performs no I/O of its own, so every
/// variant is handed back to the caller to decide what to do.
#[derive(Debug, Error)]
pub enum Error {
    /// A word or feedback string does not have the configured length.
    #[error("expected {expected} letters, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Ranking was requested with no candidates left.
    #[error("no candidate words to rank")]
    EmptyCandidateSet,

    #[error("invalid word '{0}': only ASCII letters are allowed")]
    InvalidWord(String),

    #[error("invalid feedback symbol '{0}'")]
    InvalidFeedback(char),

    /// A candidate has no weight in the corpus it is ranked against.
    #[error("the word '{0}' is not in the corpus")]
    UnknownWord(String),

    #[error("the word '{0}' must have a positive weight")]
    NonPositiveWeight(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
