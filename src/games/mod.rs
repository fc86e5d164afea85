//! Memorization games played over a `Passage`.
//!
//! - `BlankingGame`: hides words one at a time until the whole passage is
//!   blanked.
//! - `PassageStats`: an externally driven tally of recall attempts.

pub mod blanking;
pub mod stats;

pub use blanking::BlankingGame;
pub use stats::{PassageStats, StatsSummary};
