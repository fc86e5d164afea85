//! The blanking game.
//!
//! Words of a passage are hidden one by one; a blanked word renders as a run
//! of underscores the same length as the word. Blanking is monotonic: no
//! operation un-blanks a word.
//!
//! ```
//! use std::rc::Rc;
//! use passage_mem::games::BlankingGame;
//! use passage_mem::text::Passage;
//!
//! let passage = Rc::new(Passage::new("The quick brown fox").unwrap());
//! let mut game = BlankingGame::new(Rc::clone(&passage));
//!
//! game.blank_word(1).unwrap();
//! assert_eq!(game.to_string(), "The _____ brown fox");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use rand::Rng;
use tracing::{debug, trace};

use crate::core::WordRng;
use crate::text::{Passage, PassageError, Result};

/// A passage with a mask of blanked word indices.
#[derive(Clone, Debug)]
pub struct BlankingGame {
    passage: Rc<Passage>,
    /// One entry per word; `true` once blanked.
    blanked: Vec<bool>,
}

impl BlankingGame {
    /// Start a game on `passage` with nothing blanked.
    #[must_use]
    pub fn new(passage: Rc<Passage>) -> Self {
        let blanked = vec![false; passage.num_words()];
        Self { passage, blanked }
    }

    /// Blank the word at `index`. Blanking an already blanked word is a no-op.
    pub fn blank_word(&mut self, index: usize) -> Result<()> {
        let size = self.passage_words();
        let slot = self
            .blanked
            .get_mut(index)
            .ok_or(PassageError::out_of_bounds(index, size))?;
        *slot = true;
        debug!(index, size, "blanked word");
        Ok(())
    }

    /// Check whether the word at `index` is blanked.
    pub fn word_is_blanked(&self, index: usize) -> Result<bool> {
        self.blanked
            .get(index)
            .copied()
            .ok_or_else(|| PassageError::out_of_bounds(index, self.passage_words()))
    }

    /// True once every word is blanked.
    #[must_use]
    pub fn all_is_blanked(&self) -> bool {
        self.blanked.iter().all(|&b| b)
    }

    /// Number of blanked words.
    #[must_use]
    pub fn blanked_count(&self) -> usize {
        self.blanked.iter().filter(|&&b| b).count()
    }

    /// Blank a uniformly random word that is not yet blanked.
    ///
    /// Draws an index and redraws while it lands on a blanked word, stopping
    /// as soon as every word is blanked. On a fully blanked game the first
    /// draw is re-blanked, which changes nothing. Returns the blanked index.
    pub fn blank_random_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let size = self.passage_words();
        let mut index = rng.gen_range(0..size);
        while self.blanked[index] && !self.all_is_blanked() {
            trace!(index, "redraw");
            index = rng.gen_range(0..size);
        }
        self.blanked[index] = true;
        debug!(index, size, "blanked random word");
        index
    }

    /// Like `blank_random_word`, with a fresh clock-seeded RNG for this call.
    pub fn blank_random_word_from_clock(&mut self) -> usize {
        self.blank_random_word(&mut WordRng::from_time())
    }

    /// The word at `index`, or underscores of the same length if blanked.
    pub fn word_at(&self, index: usize) -> Result<Cow<'_, str>> {
        let word = self.passage.word_at(index)?;
        if self.blanked[index] {
            Ok(Cow::Owned("_".repeat(word.chars().count())))
        } else {
            Ok(Cow::Borrowed(word))
        }
    }

    /// Check a recall attempt against the underlying passage.
    ///
    /// Updates the passage's counters.
    pub fn matches(&self, input: &str) -> bool {
        self.passage.matches(input)
    }

    /// Number of words in the underlying passage.
    #[must_use]
    pub fn passage_words(&self) -> usize {
        self.passage.num_words()
    }

    /// The passage this game is played on.
    #[must_use]
    pub fn passage(&self) -> &Rc<Passage> {
        &self.passage
    }
}

impl fmt::Display for BlankingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (word, &blanked)) in self.passage.words().zip(&self.blanked).enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if blanked {
                for _ in word.chars() {
                    f.write_str("_")?;
                }
            } else {
                f.write_str(word)?;
            }
        }
        Ok(())
    }
}
