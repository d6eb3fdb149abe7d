//! Word frequency corpus.
//!
//! The corpus maps each word of the configured length to a positive
//! popularity weight. It is read from a `word,count` CSV table with a header
//! row; rows for words of other lengths or with non-letter characters are
//! skipped.

use crate::error::{Error, Result};
use crate::word::Word;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable word → weight mapping for words of a single length.
#[derive(Debug, Clone)]
pub struct FrequencyCorpus {
    word_length: usize,
    weights: HashMap<Word, u64>,
    /// Keys in alphabetical order
    words: Vec<Word>,
}

impl FrequencyCorpus {
    /// Build a corpus from validated entries.
    ///
    /// Every word must have `word_length` letters and a positive weight. When a
    /// word repeats, the larger weight wins.
    pub fn new<I>(word_length: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Word, u64)>,
    {
        let mut weights = HashMap::new();
        for (word, weight) in entries {
            word.check_length(word_length)?;
            if weight == 0 {
                return Err(Error::NonPositiveWeight(word.to_string()));
            }
            let entry = weights.entry(word).or_insert(weight);
            *entry = (*entry).max(weight);
        }

        let mut words: Vec<Word> = weights.keys().cloned().collect();
        words.sort();

        Ok(Self {
            word_length,
            weights,
            words,
        })
    }

    /// Convenience constructor from string literals.
    pub fn from_pairs<'a, I>(word_length: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(w, weight)| -> Result<(Word, u64)> { Ok((Word::parse(w)?, weight)) })
            .collect::<Result<Vec<_>>>()?;
        Self::new(word_length, entries)
    }

    /// Read a `word,count` table. The first line is a header and is skipped.
    pub fn from_reader<R: BufRead>(reader: R, word_length: usize) -> Result<Self> {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (word, count) = line.split_once(',').ok_or_else(|| Error::MalformedLine {
                line: line_no,
                reason: "expected 'word,count'".to_string(),
            })?;

            let word = match Word::parse_with_length(word, word_length) {
                Ok(word) => word,
                Err(_) => {
                    log::trace!("line {}: skipping '{}'", line_no, word);
                    skipped += 1;
                    continue;
                }
            };

            let count: u64 = count.trim().parse().map_err(|e| Error::MalformedLine {
                line: line_no,
                reason: format!("bad count '{}': {}", count.trim(), e),
            })?;
            if count == 0 {
                log::warn!("line {}: '{}' has a zero count, skipping", line_no, word);
                skipped += 1;
                continue;
            }

            entries.push((word, count));
        }

        let corpus = Self::new(word_length, entries)?;
        log::debug!(
            "loaded {} words of length {} ({} rows skipped)",
            corpus.len(),
            word_length,
            skipped
        );
        Ok(corpus)
    }

    pub fn from_csv_str(text: &str, word_length: usize) -> Result<Self> {
        Self::from_reader(text.as_bytes(), word_length)
    }

    pub fn load<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), word_length)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words, alphabetically.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn weight(&self, word: &Word) -> Option<u64> {
        self.weights.get(word).copied()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
