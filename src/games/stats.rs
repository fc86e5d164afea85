//! Recall statistics for a passage.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::text::Passage;

/// Success/fail tally for learning one passage.
///
/// Independent of the passage's own `matches` counters: callers decide what
/// counts as an attempt. Cloning copies the counters and shares the passage.
#[derive(Clone, Debug)]
pub struct PassageStats {
    passage: Rc<Passage>,
    successes: u32,
    fails: u32,
}

impl PassageStats {
    /// Start a tally for `passage` with zero successes and fails.
    #[must_use]
    pub fn new(passage: Rc<Passage>) -> Self {
        Self {
            passage,
            successes: 0,
            fails: 0,
        }
    }

    pub fn inc_successes(&mut self) {
        self.successes += 1;
    }

    pub fn inc_fails(&mut self) {
        self.fails += 1;
    }

    /// Count one attempt as a success or a fail.
    pub fn record(&mut self, matched: bool) {
        if matched {
            self.inc_successes();
        } else {
            self.inc_fails();
        }
    }

    #[must_use]
    pub fn successes(&self) -> u32 {
        self.successes
    }

    #[must_use]
    pub fn fails(&self) -> u32 {
        self.fails
    }

    #[must_use]
    pub fn passage(&self) -> &Rc<Passage> {
        &self.passage
    }

    /// Total recorded attempts.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.successes + self.fails
    }

    /// Fraction of attempts that succeeded (0.0 with no attempts).
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.attempts() == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.attempts())
        }
    }

    /// Snapshot the tally for reporting.
    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            words: self.passage.num_words(),
            successes: self.successes,
            fails: self.fails,
            accuracy: self.accuracy(),
        }
    }
}

/// Serializable snapshot of a `PassageStats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Words in the passage.
    pub words: usize,
    pub successes: u32,
    pub fails: u32,
    /// Successes over attempts.
    pub accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PassageStats {
        PassageStats::new(Rc::new(Passage::new("to be or not to be").unwrap()))
    }

    #[test]
    fn test_stats_default() {
        let stats = stats();
        assert_eq!(stats.successes(), 0);
        assert_eq!(stats.fails(), 0);
        assert_eq!(stats.accuracy(), 0.0);
    }

    #[test]
    fn test_increments() {
        let mut stats = stats();
        stats.inc_successes();
        stats.inc_successes();
        stats.inc_fails();
        stats.record(false);

        assert_eq!(stats.successes(), 2);
        assert_eq!(stats.fails(), 2);
        assert_eq!(stats.attempts(), 4);
        assert_eq!(stats.accuracy(), 0.5);
    }

    #[test]
    fn test_clone_copies_counters_and_shares_passage() {
        let mut original = stats();
        original.inc_successes();

        let mut copy = original.clone();
        copy.inc_fails();

        assert_eq!(copy.successes(), 1);
        assert_eq!(copy.fails(), 1);
        assert_eq!(original.fails(), 0);
        assert!(Rc::ptr_eq(original.passage(), copy.passage()));
    }

    #[test]
    fn test_independent_of_passage_counters() {
        let mut stats = stats();
        stats.passage().matches("wrong");
        stats.inc_successes();

        assert_eq!(stats.passage().fails(), 1);
        assert_eq!(stats.fails(), 0);
        assert_eq!(stats.successes(), 1);
    }

    #[test]
    fn test_summary_serialization() {
        let mut stats = stats();
        stats.record(true);

        let summary = stats.summary();
        assert_eq!(summary.words, 6);

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: StatsSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
