use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::trace::TraceEvent;

/// Terminal status of a reduction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReductionStatus {
    /// The graph collapsed to at most two nodes; the accumulator holds the
    /// complete invariant.
    Reduced,
    /// More than two nodes remain and no rule applies. The accumulator is
    /// partial. Never conflated with success.
    Irreducible,
    /// The caller's cancellation flag was observed between iterations.
    Cancelled,
}

/// Structured result of a reduction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionReport {
    /// Terminal status of the run.
    pub status: ReductionStatus,
    /// Accumulated natural log of the weighted spanning-tree count.
    pub log_tau: f64,
    /// Entropy `log_tau / initial_node_count`.
    pub rho: f64,
    /// Node count captured once when the run started.
    pub initial_node_count: usize,
    /// Nodes remaining when the run stopped.
    pub final_node_count: usize,
    /// Edges remaining when the run stopped.
    pub final_edge_count: usize,
    /// Number of node eliminations performed.
    pub eliminations: usize,
    /// Events per rule name.
    pub rule_counts: BTreeMap<String, usize>,
    /// Ordered transformation history.
    pub events: Vec<TraceEvent>,
    /// Canonical state hashes in first-seen order, when recording was
    /// enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state_hashes: Vec<String>,
}

/// Entropy of the reduced network: the log invariant normalized by the
/// initial node count. Pure; a zero node count yields zero.
pub fn entropy(log_tau: f64, initial_node_count: usize) -> f64 {
    if initial_node_count == 0 {
        return 0.0;
    }
    log_tau / initial_node_count as f64
}
