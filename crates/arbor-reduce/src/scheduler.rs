use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use arbor_core::{ArborError, ErrorInfo};
use arbor_graph::{canonical_hash, Multigraph};

use crate::config::ReduceConfig;
use crate::report::{entropy, ReductionReport, ReductionStatus};
use crate::rules;
use crate::trace::{ReductionTrace, RuleKind};

/// Reduces the graph in place until at most two nodes remain or no rule
/// applies, returning the structured report.
///
/// The graph is a single mutable resource; the run is synchronous and must
/// not be shared across threads without external mutual exclusion.
pub fn reduce(graph: &mut Multigraph, config: &ReduceConfig) -> Result<ReductionReport, ArborError> {
    let never = AtomicBool::new(false);
    reduce_cancellable(graph, config, &never)
}

/// Like [`reduce`], with a cooperative cancellation flag checked between
/// scheduler iterations. A run observed as cancelled stops after the last
/// completed rule application and reports [`ReductionStatus::Cancelled`].
pub fn reduce_cancellable(
    graph: &mut Multigraph,
    config: &ReduceConfig,
    cancel: &AtomicBool,
) -> Result<ReductionReport, ArborError> {
    let initial_node_count = graph.node_count();
    if initial_node_count == 0 {
        return Err(ArborError::Input(ErrorInfo::new(
            "empty-graph",
            "reduction requires at least one node",
        )));
    }

    let mut trace = ReductionTrace::new();
    if config.record_hashes {
        trace.note_state(canonical_hash(graph));
    }

    let status = loop {
        if cancel.load(Ordering::Relaxed) {
            break ReductionStatus::Cancelled;
        }
        if graph.node_count() <= 2 {
            break ReductionStatus::Reduced;
        }
        if let Some(cap) = config.max_eliminations {
            if trace.eliminations() >= cap {
                return Err(ArborError::Reduce(
                    ErrorInfo::new("elimination-cap", "configured elimination bound exceeded")
                        .with_context("cap", cap),
                ));
            }
        }
        // Fixed priority: cheap cleanups ahead of fill-producing rules,
        // restarting from the top after the first rule that changes the
        // graph. Every elimination removes exactly one node, so the loop
        // terminates after at most initial_node_count - 2 eliminations.
        let changed = rules::merge_parallel(graph, &mut trace)?
            || rules::eliminate_series(graph, &mut trace)?
            || rules::eliminate_triangle(graph, &mut trace)?
            || rules::eliminate_star_mesh(graph, &mut trace)?;
        if !changed {
            break ReductionStatus::Irreducible;
        }
        if config.record_hashes {
            trace.note_state(canonical_hash(graph));
        }
    };

    if status == ReductionStatus::Reduced {
        finalize(graph, &mut trace)?;
        if config.record_hashes {
            trace.note_state(canonical_hash(graph));
        }
    }

    let log_tau = trace.log_tau();
    let mut rule_counts: BTreeMap<String, usize> = BTreeMap::new();
    for event in trace.events() {
        *rule_counts.entry(event.rule.as_str().to_string()).or_insert(0) += 1;
    }
    Ok(ReductionReport {
        status,
        log_tau,
        rho: entropy(log_tau, initial_node_count),
        initial_node_count,
        final_node_count: graph.node_count(),
        final_edge_count: graph.edge_count(),
        eliminations: trace.eliminations(),
        rule_counts,
        state_hashes: trace.state_hashes(),
        events: trace.into_events(),
    })
}

/// Folds the residual edge into the accumulator once the graph is down to
/// at most two nodes: merge any leftover parallel bundle, then add the
/// single remaining edge's `ln(weight)`.
fn finalize(graph: &mut Multigraph, trace: &mut ReductionTrace) -> Result<(), ArborError> {
    rules::merge_parallel(graph, trace)?;
    if let Some(&(_, _, weight)) = graph.edge_triples().first() {
        let log_delta = rules::ln_checked(weight)?;
        trace.record(RuleKind::ResidualFold, None, None, log_delta);
    }
    Ok(())
}
