//! # Wordle Assist
//!
//! An interactive assistant for fixed-length word-guessing puzzles.
//!
//! Each round the assistant ranks the words still in play by a
//! frequency-weighted letter score. It then folds the guess and its
//! feedback into accumulated constraints, and filters the pool down to the
//! words consistent with everything seen so far.

pub mod config;
pub mod constraints;
pub mod corpus;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod scorer;
pub mod solver;
pub mod word;

pub use config::{SolverConfig, DEFAULT_MAX_ROUNDS, DEFAULT_SUGGESTIONS, DEFAULT_WORD_LENGTH};
pub use constraints::{ConstraintState, LetterSet};
pub use corpus::FrequencyCorpus;
pub use error::{Error, Result};
pub use feedback::{Feedback, FeedbackSymbol};
pub use filter::{filter, is_consistent};
pub use scorer::{rank, LetterTables, Suggestion};
pub use solver::{benchmark, solve_for_target, BenchmarkReport, GameOutcome, Round};
pub use word::Word;

/// Load the embedded sample frequency table, keeping words of `word_length`.
pub fn load_sample_corpus(word_length: usize) -> Result<FrequencyCorpus> {
    FrequencyCorpus::from_csv_str(include_str!("../data/sample_freq.csv"), word_length)
}
