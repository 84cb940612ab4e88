//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Alpha-beta cutoffs (default: true).
    /// Disabling gives plain exhaustive minimax with the same value.
    pub pruning: bool,

    /// Search root moves on the rayon pool (default: false).
    /// Each root move gets its own full window, so the value and chosen move
    /// match the sequential search.
    pub parallel: bool,

    /// Magnitude of a terminal win (default: 100, at least 1).
    /// Values shrink by one per ply, so this must exceed the branch count
    /// for the sign of a deep win to survive.
    pub win_value: u16,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            parallel: false,
            win_value: 100,
        }
    }
}

impl SearchConfig {
    /// Exhaustive minimax without cutoffs.
    pub fn exhaustive() -> Self {
        Self::default().with_pruning(false)
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the terminal magnitude. Zero is raised to 1.
    pub fn with_win_value(mut self, win_value: u16) -> Self {
        self.win_value = win_value.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(config.pruning);
        assert!(!config.parallel);
        assert_eq!(config.win_value, 100);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_pruning(false)
            .with_parallel(true)
            .with_win_value(1_000);

        assert!(!config.pruning);
        assert!(config.parallel);
        assert_eq!(config.win_value, 1_000);
        assert!(!SearchConfig::exhaustive().pruning);
    }

    #[test]
    fn test_win_value_is_positive() {
        assert_eq!(SearchConfig::default().with_win_value(0).win_value, 1);
        assert_eq!(SearchConfig::default().with_win_value(u16::MAX).win_value, u16::MAX);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_win_value(250);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
