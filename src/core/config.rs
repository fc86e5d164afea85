//! Drill configuration.

use serde::{Deserialize, Serialize};

/// Options for one run of the blanking drill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Seed for the blanking order.
    /// `None` seeds from the system clock.
    pub seed: Option<u64>,

    /// Read a recall attempt after each rendering and score it.
    pub practice: bool,

    /// Print the practice summary as a JSON line.
    pub json_summary: bool,
}

impl DrillConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable practice mode.
    pub fn with_practice(mut self, practice: bool) -> Self {
        self.practice = practice;
        self
    }

    /// Enable or disable the JSON summary.
    pub fn with_json_summary(mut self, json: bool) -> Self {
        self.json_summary = json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DrillConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.practice);
        assert!(!config.json_summary);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DrillConfig::new()
            .with_seed(123)
            .with_practice(true)
            .with_json_summary(true);

        assert_eq!(config.seed, Some(123));
        assert!(config.practice);
        assert!(config.json_summary);
    }

    #[test]
    fn test_serialization() {
        let config = DrillConfig::new().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DrillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
