use arbor_core::{ArborError, ErrorInfo, NodeId};
use arbor_graph::Multigraph;

use crate::trace::{ReductionTrace, RuleKind};

/// Guarded natural log. Non-positive arguments cannot occur while the
/// positive-weight invariant holds; a violation is surfaced instead of
/// letting a NaN or -inf reach the accumulator.
pub(crate) fn ln_checked(value: f64) -> Result<f64, ArborError> {
    if value > 0.0 {
        Ok(value.ln())
    } else {
        Err(ArborError::Reduce(
            ErrorInfo::new("log-domain", "logarithm argument is not positive")
                .with_context("value", value),
        ))
    }
}

/// Collapses every parallel edge bundle into a single summed edge.
///
/// Runs to a fixed point within the call and returns whether any merge
/// occurred. Merging preserves the spanning-tree invariant exactly, so the
/// accumulator is never touched here; double-counting a merge would corrupt
/// it.
pub fn merge_parallel(
    graph: &mut Multigraph,
    trace: &mut ReductionTrace,
) -> Result<bool, ArborError> {
    let mut changed = false;
    loop {
        let pairs = graph.parallel_pairs();
        if pairs.is_empty() {
            break;
        }
        for (u, v) in pairs {
            changed |= graph.merge_parallel(u, v)?;
        }
    }
    if changed {
        trace.record(RuleKind::ParallelMerge, None, None, 0.0);
    }
    Ok(changed)
}

/// Eliminates nodes with exactly two distinct neighbors under the series
/// law: incident weights `a, b` become one edge of `a*b/(a+b)` and the
/// accumulator gains `ln(a+b)`.
///
/// Sweeps every current degree-2 candidate; a candidate whose neighborhood
/// no longer matches by the time it is visited is skipped, not fatal.
pub fn eliminate_series(
    graph: &mut Multigraph,
    trace: &mut ReductionTrace,
) -> Result<bool, ArborError> {
    let mut changed = false;
    for node in graph.nodes_with_degree(2) {
        if !graph.contains_node(node) || graph.degree(node)? != 2 {
            continue;
        }
        let incident = graph.incident_weights(node)?;
        let &[(u, a), (v, b)] = incident.as_slice() else {
            continue;
        };
        // An earlier elimination in this sweep can leave a parallel bundle
        // at a queued candidate; its weights must be merged before the
        // series law applies, so leave it for the next scheduler round.
        if graph.parallel_count(node, u)? != 1 || graph.parallel_count(node, v)? != 1 {
            continue;
        }
        let denom = a + b;
        let log_delta = ln_checked(denom)?;
        graph.remove_node(node)?;
        graph.add_edge(u, v, a * b / denom)?;
        trace.record(RuleKind::Series, Some(node), Some(2), log_delta);
        changed = true;
    }
    Ok(changed)
}

/// Eliminates one node with exactly three distinct neighbors, connecting
/// the neighbors as a triangle: weights `a, b, c` with `S = a+b+c` become
/// edges `ab/S`, `ac/S`, `bc/S`, and the accumulator gains `ln S`.
///
/// Processes a single node per call; the new triangle edges may parallel
/// pre-existing ones, so the caller must re-run [`merge_parallel`] before
/// classifying degrees again.
pub fn eliminate_triangle(
    graph: &mut Multigraph,
    trace: &mut ReductionTrace,
) -> Result<bool, ArborError> {
    for node in graph.nodes_with_degree(3) {
        let incident = graph.incident_weights(node)?;
        let &[(n1, a), (n2, b), (n3, c)] = incident.as_slice() else {
            continue;
        };
        if graph.parallel_count(node, n1)? != 1
            || graph.parallel_count(node, n2)? != 1
            || graph.parallel_count(node, n3)? != 1
        {
            continue;
        }
        let total = a + b + c;
        let log_delta = ln_checked(total)?;
        graph.remove_node(node)?;
        graph.add_edge(n1, n2, a * b / total)?;
        graph.add_edge(n1, n3, a * c / total)?;
        graph.add_edge(n2, n3, b * c / total)?;
        trace.record(RuleKind::Triangle, Some(node), Some(3), log_delta);
        return Ok(true);
    }
    Ok(false)
}

/// Eliminates one node of degree greater than three, connecting its
/// neighbors as a full clique: neighbor weights `w_i` with `S = sum(w_i)`
/// produce an edge `w_i*w_j/S` per unordered pair, and the accumulator
/// gains `ln S`.
///
/// The candidate is the smallest-degree node above three, ties broken by
/// the smallest id. Eliminating a degree-k node adds up to `k*(k-1)/2`
/// edges, so taking the lowest degree first bounds cumulative fill-in the
/// same way minimum-degree orderings do in sparse elimination.
pub fn eliminate_star_mesh(
    graph: &mut Multigraph,
    trace: &mut ReductionTrace,
) -> Result<bool, ArborError> {
    let Some((node, _)) = graph.min_degree_node_above(3) else {
        return Ok(false);
    };
    eliminate_star_mesh_at(graph, node, trace)
}

/// Applies the star-mesh rewrite to a specific node of degree at least two.
///
/// On a degree-3 node this produces exactly the triangle elimination:
/// identical edges and an identical accumulator delta. Returns `false`
/// when the node's neighborhood fails a precondition (too few neighbors or
/// an unmerged parallel bundle); the attempt is skipped, not fatal.
pub fn eliminate_star_mesh_at(
    graph: &mut Multigraph,
    node: NodeId,
    trace: &mut ReductionTrace,
) -> Result<bool, ArborError> {
    let weighted = graph.incident_weights(node)?;
    let degree = weighted.len();
    if degree < 2 {
        return Ok(false);
    }
    for &(neighbor, _) in &weighted {
        if graph.parallel_count(node, neighbor)? != 1 {
            return Ok(false);
        }
    }
    let total: f64 = weighted.iter().map(|(_, weight)| weight).sum();
    let log_delta = ln_checked(total)?;
    graph.remove_node(node)?;
    graph.add_clique(&weighted, total)?;
    trace.record(RuleKind::StarMesh, Some(node), Some(degree), log_delta);
    Ok(true)
}
