//! # passage-mem
//!
//! A console memorization game. A passage is split into words, words are
//! blanked out one at a time, and the user retypes the passage from memory.
//!
//! ## Modules
//!
//! - `text`: Passage tokenization, recall checks, errors
//! - `games`: The blanking game and recall statistics
//! - `core`: Deterministic RNG and drill configuration
//! - `drill`: The render/blank loop behind the console binary

pub mod core;
pub mod text;
pub mod games;
pub mod drill;

// Re-export commonly used types
pub use crate::core::{DrillConfig, WordRng};

pub use crate::text::{Passage, PassageError};

pub use crate::games::{BlankingGame, PassageStats, StatsSummary};

pub use crate::drill::{run, DrillError, DrillOutcome};
