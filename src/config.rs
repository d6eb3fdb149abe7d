//! Solver settings.

use crate::error::{Error, Result};

/// Word length for standard Wordle
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Number of suggestions shown per round
pub const DEFAULT_SUGGESTIONS: usize = 3;

/// Guesses allowed in a simulated game
pub const DEFAULT_MAX_ROUNDS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub word_length: usize,
    pub suggestions: usize,
    pub max_rounds: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            suggestions: DEFAULT_SUGGESTIONS,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(Error::InvalidConfig("word length must be positive"));
        }
        if self.suggestions == 0 {
            return Err(Error::InvalidConfig("at least one suggestion is required"));
        }
        if self.max_rounds == 0 {
            return Err(Error::InvalidConfig("at least one round is required"));
        }
        Ok(())
    }
}
