use serde::{Deserialize, Serialize};

/// Parameters governing a reduction run.
///
/// Every field has a serde default, so an empty document deserializes to
/// the default configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Record the canonical graph hash after every applied rule. Costs a
    /// full structural hash per change; meant for determinism diagnostics.
    #[serde(default)]
    pub record_hashes: bool,
    /// Defensive upper bound on node eliminations. A connected input needs
    /// at most `initial_node_count - 2`; exceeding the bound aborts with
    /// code `elimination-cap`.
    #[serde(default)]
    pub max_eliminations: Option<usize>,
    /// Reference entropy for robustness comparison. The engine itself
    /// never compares; callers apply the verdict when a value is present.
    #[serde(default)]
    pub reference_entropy: Option<f64>,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            record_hashes: false,
            max_eliminations: None,
            reference_entropy: None,
        }
    }
}
