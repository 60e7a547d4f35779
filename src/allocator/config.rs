//! Allocator configuration.

use serde::{Deserialize, Serialize};

use super::MismatchPenalties;

/// Tunables for [`super::RoleAllocator`].
///
/// Deserializes from partial documents; missing fields take defaults.
///
/// ```
/// use u_roster::allocator::AllocatorConfig;
///
/// let config: AllocatorConfig =
///     serde_json::from_str(r#"{ "penalties": { "strong": 1000 } }"#).unwrap();
/// assert_eq!(config.penalties.strong, 1000);
/// assert_eq!(config.penalties.weak, 10);
/// assert!(config.shuffle_output);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Mismatch penalties for dual-role splits.
    pub penalties: MismatchPenalties,
    /// Shuffle each output bucket after placement (default: true).
    ///
    /// Turning this off keeps bucket order deterministic apart from the
    /// flex shuffle, which is useful when inspecting a single run.
    pub shuffle_output: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            penalties: MismatchPenalties::default(),
            shuffle_output: true,
        }
    }
}

impl AllocatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mismatch penalties.
    pub fn with_penalties(mut self, penalties: MismatchPenalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// Enables or disables the final bucket shuffle.
    pub fn with_shuffle_output(mut self, shuffle: bool) -> Self {
        self.shuffle_output = shuffle;
        self
    }
}
