use std::fmt::{self, Display};

use arbor_core::NodeId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Kind of rewrite applied to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Collapse of parallel edges into their conductance sum.
    ParallelMerge,
    /// Degree-2 node elimination under the series law.
    Series,
    /// Degree-3 node elimination onto the neighbor triangle.
    Triangle,
    /// General degree-k elimination onto the neighbor clique.
    StarMesh,
    /// Final fold of the residual edge weight into the accumulator.
    ResidualFold,
}

impl RuleKind {
    /// Returns the stable kebab-case name of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ParallelMerge => "parallel-merge",
            RuleKind::Series => "series",
            RuleKind::Triangle => "triangle",
            RuleKind::StarMesh => "star-mesh",
            RuleKind::ResidualFold => "residual-fold",
        }
    }

    /// Returns whether the rule removes a node from the graph.
    pub fn eliminates(&self) -> bool {
        matches!(self, RuleKind::Series | RuleKind::Triangle | RuleKind::StarMesh)
    }
}

/// One applied transformation, in order of application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// The rewrite rule that fired.
    pub rule: RuleKind,
    /// The eliminated node, when the rule removes one.
    pub node: Option<NodeId>,
    /// Degree of the eliminated node at elimination time.
    pub degree: Option<usize>,
    /// Contribution added to the log accumulator by this event.
    pub log_delta: f64,
}

impl Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule.as_str())?;
        if let Some(node) = self.node {
            write!(f, " node {node}")?;
        }
        if let Some(degree) = self.degree {
            write!(f, " degree {degree}")?;
        }
        if self.log_delta != 0.0 {
            write!(f, " ln-delta {:.6}", self.log_delta)?;
        }
        Ok(())
    }
}

/// Run state threaded through every rule call.
///
/// The trace owns the log-space accumulator and the ordered transformation
/// history, replacing shared mutable run state so alternate scheduling
/// policies can be compared side by side on clones of the same graph.
#[derive(Debug, Clone, Default)]
pub struct ReductionTrace {
    log_tau: f64,
    eliminations: usize,
    events: Vec<TraceEvent>,
    state_hashes: IndexSet<String>,
}

impl ReductionTrace {
    /// Creates an empty trace with the accumulator at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated natural log of the spanning-tree invariant.
    pub fn log_tau(&self) -> f64 {
        self.log_tau
    }

    /// Returns the number of node eliminations recorded so far.
    pub fn eliminations(&self) -> usize {
        self.eliminations
    }

    /// Returns the ordered transformation history.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Records an applied rule and folds its contribution into the
    /// accumulator.
    pub fn record(
        &mut self,
        rule: RuleKind,
        node: Option<NodeId>,
        degree: Option<usize>,
        log_delta: f64,
    ) {
        self.log_tau += log_delta;
        if rule.eliminates() {
            self.eliminations += 1;
        }
        self.events.push(TraceEvent {
            rule,
            node,
            degree,
            log_delta,
        });
    }

    /// Notes the canonical hash of the graph after a change, keeping the
    /// first-seen order and dropping duplicates.
    pub fn note_state(&mut self, hash: String) {
        self.state_hashes.insert(hash);
    }

    /// Returns the recorded state hashes in first-seen order.
    pub fn state_hashes(&self) -> Vec<String> {
        self.state_hashes.iter().cloned().collect()
    }

    /// Consumes the trace, returning the ordered history.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
