//! Passage text: tokenizing a passage into words and checking recall.
//!
//! A `Passage` is built once from a line of text and never changes its words.
//! Everything that indexes into it reports failures through `PassageError`.

pub mod error;
pub mod passage;

pub use error::{PassageError, Result};
pub use passage::Passage;
