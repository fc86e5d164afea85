//! Tokenized passage of text.
//!
//! ## Tokenization
//!
//! The input is trimmed, then split at every single `' '` character. Runs of
//! spaces therefore produce empty words, and tabs are never separators:
//!
//! ```
//! use passage_mem::text::Passage;
//!
//! let passage = Passage::new("  The quick brown fox ").unwrap();
//! assert_eq!(passage.full(), "The quick brown fox");
//! assert_eq!(passage.num_words(), 4);
//! assert_eq!(passage.word_at(1).unwrap(), "quick");
//!
//! let spaced = Passage::new("a  b").unwrap();
//! assert_eq!(spaced.words().collect::<Vec<_>>(), vec!["a", "", "b"]);
//! ```
//!
//! ## Recall counters
//!
//! `matches` records every comparison in interior counters, so a passage
//! shared behind an `Rc` can still tally attempts through `&self`.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{PassageError, Result};

const EMPTY_PASSAGE: &str = "Passage cannot be empty.";

/// An ordered list of the words in a passage of text.
///
/// Equality and hashing consider only the trimmed text; the recall counters
/// are excluded.
#[derive(Clone, Debug)]
pub struct Passage {
    full: String,
    words: Vec<String>,
    successes: Cell<u32>,
    fails: Cell<u32>,
}

impl Passage {
    /// Tokenize `text` into a passage.
    ///
    /// Fails with `PassageError::Definition` if `text` is blank.
    pub fn new(text: &str) -> Result<Self> {
        let full = text.trim();
        if full.is_empty() {
            return Err(PassageError::Definition {
                message: EMPTY_PASSAGE.to_string(),
            });
        }

        let words = full.split(' ').map(str::to_string).collect();

        Ok(Self {
            full: full.to_string(),
            words,
            successes: Cell::new(0),
            fails: Cell::new(0),
        })
    }

    /// Get the word at the 0-based `index`.
    pub fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| PassageError::out_of_bounds(index, self.num_words()))
    }

    /// Number of words. Always at least 1.
    #[must_use]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// The trimmed passage text.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Check whether `input` (trimmed) is exactly the passage text.
    ///
    /// Increments the success counter on a match and the fail counter
    /// otherwise.
    pub fn matches(&self, input: &str) -> bool {
        let matched = self.full == input.trim();
        let counter = if matched { &self.successes } else { &self.fails };
        counter.set(counter.get() + 1);
        matched
    }

    /// Successful `matches` calls so far.
    #[must_use]
    pub fn successes(&self) -> u32 {
        self.successes.get()
    }

    /// Failed `matches` calls so far.
    #[must_use]
    pub fn fails(&self) -> u32 {
        self.fails.get()
    }

    /// Iterate over the words in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl PartialEq for Passage {
    fn eq(&self, other: &Self) -> bool {
        self.full == other.full
    }
}

impl Eq for Passage {}

impl Hash for Passage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full.hash(state);
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl<'a> IntoIterator for &'a Passage {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
