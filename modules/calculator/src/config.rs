use serde::{Deserialize, Serialize};

/// Number of history entries retained when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 25;

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Calculator module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum retained history entries; the oldest entry is evicted on overflow.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
