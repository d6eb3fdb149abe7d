//! Validated guess and candidate words.

use crate::error::{Error, Result};
use std::fmt;

/// A lowercase ASCII word.
///
/// Construction only checks the alphabet; the length is checked against the
/// configured word length by whoever consumes the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Parse a word, lowercasing it. Fails on empty input or any character
    /// that is not an ASCII letter.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidWord(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Parse a word and require it to have exactly `length` letters.
    pub fn parse_with_length(s: &str, length: usize) -> Result<Self> {
        let word = Self::parse(s)?;
        word.check_length(length)?;
        Ok(word)
    }

    pub fn check_length(&self, length: usize) -> Result<()> {
        if self.len() != length {
            return Err(Error::LengthMismatch {
                expected: length,
                found: self.len(),
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters of the word, in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of times `letter` occurs in the word.
    pub fn count(&self, letter: char) -> usize {
        self.0.chars().filter(|&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases() {
        assert_eq!(Word::parse("CrAnE").unwrap().as_str(), "crane");
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!(matches!(Word::parse("cr4ne"), Err(Error::InvalidWord(_))));
        assert!(matches!(Word::parse(""), Err(Error::InvalidWord(_))));
    }

    #[test]
    fn parse_with_length_checks_length() {
        assert!(matches!(
            Word::parse_with_length("cranes", 5),
            Err(Error::LengthMismatch { expected: 5, found: 6 })
        ));
    }

    #[test]
    fn count_letters() {
        let word = Word::parse("sassy").unwrap();
        assert_eq!(word.count('s'), 3);
        assert_eq!(word.count('y'), 1);
        assert_eq!(word.count('z'), 0);
    }
}
