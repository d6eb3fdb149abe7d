//! Knowledge accumulated from guess/feedback pairs.
//!
//! A [`ConstraintState`] records three kinds of facts about the hidden word:
//! letters fixed at a position, letters forbidden at a position, and the
//! minimum number of times a letter occurs. Each round of feedback produces a
//! new state built on the previous one.

use crate::error::{Error, Result};
use crate::feedback::{Feedback, FeedbackSymbol};
use crate::word::Word;
use std::collections::BTreeMap;

/// A set of lowercase ASCII letters stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    bits: u32,
}

fn to_ascii_index(letter: char) -> u32 {
    debug_assert!(letter.is_ascii_lowercase(), "unsupported character");
    (letter as u32).wrapping_sub('a' as u32)
}

impl LetterSet {
    pub fn insert(&mut self, letter: char) {
        self.bits |= 1u32 << to_ascii_index(letter);
    }

    pub fn remove(&mut self, letter: char) {
        self.bits &= !(1u32 << to_ascii_index(letter));
    }

    pub fn contains(&self, letter: char) -> bool {
        letter.is_ascii_lowercase() && (self.bits & (1u32 << to_ascii_index(letter))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Letters in the set, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = LetterSet::default();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

/// Constraints on the hidden word derived from all feedback so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letter confirmed at each position
    fixed: Vec<Option<char>>,
    /// Letters known not to occupy each position
    forbidden: Vec<LetterSet>,
    /// Minimum number of occurrences of a letter anywhere in the word
    min_count: BTreeMap<char, usize>,
}

impl ConstraintState {
    /// The state before any feedback: nothing is known.
    pub fn new(word_length: usize) -> Self {
        Self {
            fixed: vec![None; word_length],
            forbidden: vec![LetterSet::default(); word_length],
            min_count: BTreeMap::new(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.fixed.len()
    }

    pub fn fixed(&self) -> &[Option<char>] {
        &self.fixed
    }

    pub fn forbidden(&self) -> &[LetterSet] {
        &self.forbidden
    }

    pub fn min_count(&self) -> &BTreeMap<char, usize> {
        &self.min_count
    }

    /// Minimum known occurrences of `letter`, 0 if nothing is known.
    pub fn min_count_of(&self, letter: char) -> usize {
        self.min_count.get(&letter).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.iter().all(Option::is_none)
            && self.forbidden.iter().all(LetterSet::is_empty)
            && self.min_count.is_empty()
    }

    /// Fold one guess and its feedback into a new state.
    ///
    /// An Absent symbol only excludes its letter from the whole word when
    /// the same guess did not also mark that letter Present or Correct. When
    /// it did, the guess simply held more copies than the solution, so the
    /// letter is excluded at that position only.
    pub fn apply_feedback(&self, guess: &Word, feedback: &Feedback) -> Result<Self> {
        let length = self.word_length();
        guess.check_length(length)?;
        if feedback.len() != length {
            return Err(Error::LengthMismatch {
                expected: length,
                found: feedback.len(),
            });
        }

        let mut next = self.clone();
        let letters: Vec<char> = guess.letters().collect();
        let symbols = feedback.symbols();

        let confirmed: LetterSet = letters
            .iter()
            .zip(symbols)
            .filter(|&(_, &s)| s != FeedbackSymbol::Absent)
            .map(|(&c, _)| c)
            .collect();

        let mut round_count: BTreeMap<char, usize> = BTreeMap::new();

        for (i, (&c, &symbol)) in letters.iter().zip(symbols).enumerate() {
            match symbol {
                FeedbackSymbol::Correct => {
                    next.fixed[i] = Some(c);
                    next.forbidden[i].remove(c);
                    *round_count.entry(c).or_insert(0) += 1;
                }
                FeedbackSymbol::Present => {
                    next.forbid(i, c);
                    *round_count.entry(c).or_insert(0) += 1;
                }
                FeedbackSymbol::Absent if confirmed.contains(c) => next.forbid(i, c),
                FeedbackSymbol::Absent => {
                    for j in 0..length {
                        next.forbid(j, c);
                    }
                }
            }
        }

        for (c, count) in round_count {
            let entry = next.min_count.entry(c).or_insert(0);
            *entry = (*entry).max(count);
        }

        log::debug!(
            "applied {} for '{}': fixed={:?} min_count={:?}",
            feedback,
            guess,
            next.fixed,
            next.min_count
        );

        Ok(next)
    }

    // a letter fixed at a position is never also forbidden there
    fn forbid(&mut self, position: usize, letter: char) {
        if self.fixed[position] != Some(letter) {
            self.forbidden[position].insert(letter);
        }
    }
}
