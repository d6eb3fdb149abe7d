//! Letter-frequency ranking of candidate words.
//!
//! Every candidate is scored from two tables built over the current pool,
//! both weighted by corpus popularity:
//!
//! - a per-position table: how much weight has letter `c` at position `i`
//! - a global table: how much weight contains letter `c` at all
//!
//! A word's raw score is the sum of its per-position entries plus the global
//! entries of its distinct letters, scaled by the natural log of its own
//! corpus weight so that popularity nudges the ranking without dominating it.

use crate::constraints::LetterSet;
use crate::corpus::FrequencyCorpus;
use crate::error::{Error, Result};
use crate::word::Word;
use std::cmp::Ordering;

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    /// Raw score divided by the best raw score, in `(0, 1]` for words whose
    /// corpus weight is above 1.
    pub score: f64,
}

/// Weighted letter frequencies over a candidate pool.
///
/// Sums are kept as `u128`: a pool of `u64` weights cannot overflow them.
#[derive(Debug, Clone)]
pub struct LetterTables {
    positional: Vec<[u128; 26]>,
    global: [u128; 26],
}

impl LetterTables {
    pub fn build(candidates: &[Word], corpus: &FrequencyCorpus) -> Result<Self> {
        let length = corpus.word_length();
        let mut positional = vec![[0u128; 26]; length];
        let mut global = [0u128; 26];

        for word in candidates {
            word.check_length(length)?;
            let weight = u128::from(weight_of(word, corpus)?);
            for (i, c) in word.letters().enumerate() {
                positional[i][slot(c)] += weight;
            }
            let distinct: LetterSet = word.letters().collect();
            for c in distinct.iter() {
                global[slot(c)] += weight;
            }
        }

        Ok(Self { positional, global })
    }

    /// Total weight of candidates with `letter` at `position`.
    pub fn positional(&self, position: usize, letter: char) -> u128 {
        self.positional
            .get(position)
            .and_then(|table| table.get(slot(letter)))
            .copied()
            .unwrap_or(0)
    }

    /// Total weight of candidates containing `letter`.
    pub fn global(&self, letter: char) -> u128 {
        self.global.get(slot(letter)).copied().unwrap_or(0)
    }

    /// Score before normalization.
    pub fn raw_score(&self, word: &Word, corpus: &FrequencyCorpus) -> Result<f64> {
        let weight = weight_of(word, corpus)?;
        let positional: u128 = word
            .letters()
            .enumerate()
            .map(|(i, c)| self.positional(i, c))
            .sum();
        let distinct: LetterSet = word.letters().collect();
        let global: u128 = distinct.iter().map(|c| self.global(c)).sum();

        Ok((positional + global) as f64 * (weight as f64).ln())
    }
}

/// Rank `candidates` and return the best `k`, normalized by the top score.
///
/// Equal raw scores are ordered alphabetically so the output is
/// reproducible. Fails with [`Error::EmptyCandidateSet`] when there is
/// nothing to rank.
pub fn rank(candidates: &[Word], corpus: &FrequencyCorpus, k: usize) -> Result<Vec<Suggestion>> {
    if candidates.is_empty() {
        return Err(Error::EmptyCandidateSet);
    }

    let tables = LetterTables::build(candidates, corpus)?;
    let mut scored: Vec<(Word, f64)> = candidates
        .iter()
        .map(|w| -> Result<(Word, f64)> {
            Ok((w.clone(), tables.raw_score(w, corpus)?))
        })
        .collect::<Result<_>>()?;

    scored.sort_by(|(wa, a), (wb, b)| match b.partial_cmp(a) {
        Some(Ordering::Equal) | None => wa.cmp(wb),
        Some(ord) => ord,
    });

    let best = scored[0].1;
    log::trace!("ranked {} candidates, best raw score {:.3}", scored.len(), best);

    scored.truncate(k);
    Ok(scored
        .into_iter()
        .map(|(word, raw)| Suggestion {
            word,
            score: normalize(raw, best),
        })
        .collect())
}

// Every raw score is zero when all candidates have weight 1; they are all
// tied for first in that case.
fn normalize(raw: f64, best: f64) -> f64 {
    if best > 0.0 {
        raw / best
    } else {
        1.0
    }
}

fn weight_of(word: &Word, corpus: &FrequencyCorpus) -> Result<u64> {
    corpus
        .weight(word)
        .ok_or_else(|| Error::UnknownWord(word.to_string()))
}

fn slot(letter: char) -> usize {
    (letter as usize).wrapping_sub('a' as usize)
}
