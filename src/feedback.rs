//! Feedback for a submitted guess.
//!
//! A guess is answered with one symbol per position. This module holds the
//! symbol type, the per-guess sequence, the canonical text encoding and the
//! keystroke translation used by the interactive prompt.

use crate::error::{Error, Result};
use crate::word::Word;
use std::fmt;

/// The answer for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Letter not in the solution at this position (gray)
    Absent,
    /// Letter in the solution but at another position (yellow)
    Present,
    /// Letter in the solution at this position (green)
    Correct,
}

impl FeedbackSymbol {
    /// Canonical encoding character.
    pub fn to_char(self) -> char {
        match self {
            FeedbackSymbol::Absent => '.',
            FeedbackSymbol::Present => 'x',
            FeedbackSymbol::Correct => 'c',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            FeedbackSymbol::Absent => '⬛',
            FeedbackSymbol::Present => '🟨',
            FeedbackSymbol::Correct => '🟩',
        }
    }

    /// Parse a canonical character (`.`, `x`, `c`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(FeedbackSymbol::Absent),
            'x' => Some(FeedbackSymbol::Present),
            'c' => Some(FeedbackSymbol::Correct),
            _ => None,
        }
    }

    /// Translate a user keystroke. Accepts the canonical characters plus the
    /// color letters and digits (b/0/-, y/1, g/2), case-insensitively.
    pub fn from_keystroke(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '.' | 'b' | '0' | '-' => Some(FeedbackSymbol::Absent),
            'x' | 'y' | '1' => Some(FeedbackSymbol::Present),
            'c' | 'g' | '2' => Some(FeedbackSymbol::Correct),
            _ => None,
        }
    }
}

/// The feedback for a whole guess, one symbol per position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackSymbol>);

impl Feedback {
    /// Feedback where every position is correct.
    pub fn all_correct(length: usize) -> Self {
        Self(vec![FeedbackSymbol::Correct; length])
    }

    /// Calculate the feedback a guess receives against a target word.
    ///
    /// Standard rules:
    /// - Correct: letter is in the correct position
    /// - Present: letter is in the word at another position, and the target
    ///   still has an unmatched copy of it
    /// - Absent: otherwise (not in the word, or all copies accounted for)
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self> {
        guess.check_length(target.len())?;
        let guess_bytes = guess.as_bytes();
        let target_bytes = target.as_bytes();

        let mut symbols = vec![FeedbackSymbol::Absent; guess_bytes.len()];
        let mut target_remaining = [0u8; 26];

        for i in 0..guess_bytes.len() {
            if guess_bytes[i] == target_bytes[i] {
                symbols[i] = FeedbackSymbol::Correct;
            } else {
                target_remaining[letter_index(target_bytes[i])] += 1;
            }
        }

        for i in 0..guess_bytes.len() {
            if symbols[i] != FeedbackSymbol::Correct {
                let idx = letter_index(guess_bytes[i]);
                if target_remaining[idx] > 0 {
                    symbols[i] = FeedbackSymbol::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Ok(Self(symbols))
    }

    /// Parse the canonical encoding, e.g. `"cx..c"`.
    pub fn parse(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| FeedbackSymbol::from_char(c).ok_or(Error::InvalidFeedback(c)))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Parse user input of exactly `length` keystrokes, accepting the aliases
    /// of [`FeedbackSymbol::from_keystroke`].
    pub fn from_keystrokes(s: &str, length: usize) -> Result<Self> {
        let s = s.trim();
        let found = s.chars().count();
        if found != length {
            return Err(Error::LengthMismatch {
                expected: length,
                found,
            });
        }
        s.chars()
            .map(|c| FeedbackSymbol::from_keystroke(c).ok_or(Error::InvalidFeedback(c)))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn symbols(&self) -> &[FeedbackSymbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == FeedbackSymbol::Correct)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: String = self.0.iter().map(|s| s.to_char()).collect();
        f.write_str(&encoded)
    }
}

fn letter_index(b: u8) -> usize {
    (b - b'a') as usize
}
