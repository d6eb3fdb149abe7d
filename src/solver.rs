//! Round-by-round solving.
//!
//! A [`Round`] is the value the interactive loop threads through a game: the
//! candidate pool still in play and the constraints that produced it.
//! Advancing a round never touches the old one. It re-filters the previous
//! pool against the new constraints and returns the next round.
//!
//! The same machinery drives simulated games against a known target, and a
//! benchmark that plays every corpus word as a target.

use crate::config::SolverConfig;
use crate::constraints::ConstraintState;
use crate::corpus::FrequencyCorpus;
use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::filter::filter;
use crate::scorer::{rank, Suggestion};
use crate::word::Word;
use rayon::prelude::*;

/// State of a game between two guesses.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    number: usize,
    pool: Vec<Word>,
    state: ConstraintState,
}

impl Round {
    /// The first round: every corpus word is possible and nothing is known.
    pub fn initial(corpus: &FrequencyCorpus) -> Self {
        Self {
            number: 1,
            pool: corpus.words().to_vec(),
            state: ConstraintState::new(corpus.word_length()),
        }
    }

    /// 1-based round number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    pub fn remaining_count(&self) -> usize {
        self.pool.len()
    }

    /// Top `k` suggestions from the current pool.
    pub fn suggest(&self, corpus: &FrequencyCorpus, k: usize) -> Result<Vec<Suggestion>> {
        rank(&self.pool, corpus, k)
    }

    /// Apply a guess and its feedback, producing the next round.
    pub fn advance(&self, guess: &Word, feedback: &Feedback) -> Result<Round> {
        let state = self.state.apply_feedback(guess, feedback)?;
        let pool = filter(&self.pool, &state);
        log::debug!(
            "round {}: '{}' {} left {} of {} candidates",
            self.number,
            guess,
            feedback,
            pool.len(),
            self.pool.len()
        );
        Ok(Round {
            number: self.number + 1,
            pool,
            state,
        })
    }
}

/// Guesses made in a simulated game.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub guesses: Vec<(Word, Feedback)>,
    pub solved: bool,
}

/// Play a game against `target`, always guessing the top suggestion.
///
/// Stops on a win, when the pool runs dry, or after `config.max_rounds`
/// guesses.
pub fn solve_for_target(
    corpus: &FrequencyCorpus,
    config: &SolverConfig,
    target: &Word,
) -> Result<GameOutcome> {
    target.check_length(corpus.word_length())?;

    let mut round = Round::initial(corpus);
    let mut guesses = Vec::new();
    let mut solved = false;

    for _ in 0..config.max_rounds {
        let best = match round.suggest(corpus, 1) {
            Ok(suggestions) => suggestions,
            Err(Error::EmptyCandidateSet) => break,
            Err(e) => return Err(e),
        };
        let Some(best) = best.into_iter().next() else {
            break;
        };

        let feedback = Feedback::calculate(&best.word, target)?;
        let win = feedback.is_win();
        round = round.advance(&best.word, &feedback)?;
        guesses.push((best.word, feedback));

        if win {
            solved = true;
            break;
        }
    }

    Ok(GameOutcome { guesses, solved })
}

/// Results of playing every corpus word as a target.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkReport {
    /// `(guesses, games)` for solved games, ascending by guess count
    pub distribution: Vec<(usize, usize)>,
    /// Targets not solved within the round limit
    pub failures: Vec<Word>,
}

impl BenchmarkReport {
    pub fn solved(&self) -> usize {
        self.distribution.iter().map(|(_, games)| games).sum()
    }

    pub fn total(&self) -> usize {
        self.solved() + self.failures.len()
    }

    /// Mean guesses over solved games.
    pub fn average_guesses(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let guesses: usize = self.distribution.iter().map(|(g, n)| g * n).sum();
        guesses as f64 / solved as f64
    }
}

/// Solve for every corpus word. Games are independent, so they run in
/// parallel; each game itself is sequential.
pub fn benchmark(corpus: &FrequencyCorpus, config: &SolverConfig) -> Result<BenchmarkReport> {
    let outcomes: Vec<(Word, GameOutcome)> = corpus
        .words()
        .par_iter()
        .map(|target| -> Result<(Word, GameOutcome)> {
            Ok((target.clone(), solve_for_target(corpus, config, target)?))
        })
        .collect::<Result<_>>()?;

    let max_guesses = outcomes
        .iter()
        .map(|(_, o)| o.guesses.len())
        .max()
        .unwrap_or(0);
    let mut counts = vec![0usize; max_guesses + 1];
    let mut failures = Vec::new();

    for (target, outcome) in outcomes {
        if outcome.solved {
            counts[outcome.guesses.len()] += 1;
        } else {
            failures.push(target);
        }
    }

    let distribution = counts
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect();

    Ok(BenchmarkReport {
        distribution,
        failures,
    })
}
