use arbor_core::NodeId;
use arbor_graph::{gen_complete, gen_cycle, gen_path, gen_star, Multigraph};
use arbor_reduce::{entropy, reduce, ReduceConfig, ReductionStatus, RuleKind};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn id(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

#[test]
fn unit_triangle_reduces_to_ln_three() {
    let mut graph = gen_cycle(3).unwrap();
    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();

    assert_eq!(report.status, ReductionStatus::Reduced);
    assert_close(report.log_tau, 3.0f64.ln());
    assert_close(report.rho, 3.0f64.ln() / 3.0);
    assert_eq!(report.initial_node_count, 3);
    assert_eq!(report.final_node_count, 2);
    assert_eq!(report.final_edge_count, 1);
}

#[test]
fn unit_path_has_exactly_one_spanning_tree() {
    // Two series eliminations collapse 1-2-3-4 to a single edge; a path
    // has exactly one spanning tree, so the full accumulator is ln 1 = 0.
    let mut graph = gen_path(4).unwrap();
    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();

    assert_eq!(report.status, ReductionStatus::Reduced);
    assert_close(report.log_tau, 0.0);
    assert_eq!(report.eliminations, 2);
    assert_eq!(report.rule_counts.get("series"), Some(&2));
}

#[test]
fn cycles_count_n_spanning_trees() {
    for n in [3usize, 5, 8, 13] {
        let mut graph = gen_cycle(n).unwrap();
        let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
        assert_eq!(report.status, ReductionStatus::Reduced);
        assert_close(report.log_tau, (n as f64).ln());
    }
}

#[test]
fn complete_graphs_match_the_cayley_count() {
    // K_n has n^(n-2) spanning trees.
    for n in [4usize, 5, 6, 7] {
        let mut graph = gen_complete(n).unwrap();
        let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
        assert_eq!(report.status, ReductionStatus::Reduced);
        assert_close(report.log_tau, (n as f64 - 2.0) * (n as f64).ln());
    }
}

#[test]
fn stars_are_trees_with_one_spanning_tree() {
    let mut graph = gen_star(4).unwrap();
    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();

    assert_eq!(report.status, ReductionStatus::Reduced);
    assert_close(report.log_tau, 0.0);
    // The degree-4 hub goes through star-mesh exactly once.
    assert_eq!(report.rule_counts.get("star-mesh"), Some(&1));
}

#[test]
fn triangle_with_pendant_keeps_tau_three() {
    // Triangle on {0,1,2} plus a pendant 3; tau = 3 for the unit triangle
    // and the pendant contributes factor 1.
    let mut graph = Multigraph::new();
    for _ in 0..4 {
        graph.add_node();
    }
    graph.add_edge(id(0), id(1), 1.0).unwrap();
    graph.add_edge(id(1), id(2), 1.0).unwrap();
    graph.add_edge(id(2), id(0), 1.0).unwrap();
    graph.add_edge(id(0), id(3), 1.0).unwrap();

    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
    assert_eq!(report.status, ReductionStatus::Reduced);
    assert_close(report.log_tau, 3.0f64.ln());
}

#[test]
fn eliminations_stay_within_the_structural_bound() {
    for n in [4usize, 6, 9] {
        let mut graph = gen_complete(n).unwrap();
        let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
        assert!(report.eliminations <= n - 2);
        // Each elimination removes exactly one node.
        assert_eq!(
            report.initial_node_count - report.final_node_count,
            report.eliminations
        );
    }
}

#[test]
fn disconnected_leftovers_are_reported_irreducible() {
    // Two disjoint unit triangles: each collapses to a 2-node component,
    // leaving 4 nodes and no applicable rule.
    let mut graph = Multigraph::new();
    for _ in 0..6 {
        graph.add_node();
    }
    for (a, b) in [(0u64, 1u64), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
        graph.add_edge(id(a), id(b), 1.0).unwrap();
    }

    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
    assert_eq!(report.status, ReductionStatus::Irreducible);
    assert_eq!(report.final_node_count, 4);
    // The partial accumulator keeps the contributions made so far.
    assert!(report.log_tau > 0.0);
    // No residual fold on an irreducible halt.
    assert!(report
        .events
        .iter()
        .all(|event| event.rule != RuleKind::ResidualFold));
}

#[test]
fn empty_graphs_are_rejected() {
    let mut graph = Multigraph::new();
    let err = reduce(&mut graph, &ReduceConfig::default()).unwrap_err();
    assert_eq!(err.code(), "empty-graph");
}

#[test]
fn single_node_reduces_trivially() {
    let mut graph = Multigraph::new();
    graph.add_node();
    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
    assert_eq!(report.status, ReductionStatus::Reduced);
    assert_close(report.log_tau, 0.0);
    assert_eq!(report.eliminations, 0);
}

#[test]
fn two_nodes_with_parallels_fold_the_merged_residual() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    graph.add_edge(a, b, 2.0).unwrap();
    graph.add_edge(a, b, 3.0).unwrap();

    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();
    assert_eq!(report.status, ReductionStatus::Reduced);
    // Parallel conductances sum to 5; tau of a two-node multigraph is the
    // total weight between them.
    assert_close(report.log_tau, 5.0f64.ln());
    assert_eq!(report.final_edge_count, 1);
}

#[test]
fn elimination_cap_aborts_with_a_structured_error() {
    let mut graph = gen_complete(8).unwrap();
    let config = ReduceConfig {
        max_eliminations: Some(2),
        ..ReduceConfig::default()
    };
    let err = reduce(&mut graph, &config).unwrap_err();
    assert_eq!(err.code(), "elimination-cap");
}

#[test]
fn history_orders_events_and_counts_match() {
    let mut graph = gen_complete(5).unwrap();
    let report = reduce(&mut graph, &ReduceConfig::default()).unwrap();

    let counted: usize = report.rule_counts.values().sum();
    assert_eq!(counted, report.events.len());
    let eliminating = report
        .events
        .iter()
        .filter(|event| event.rule.eliminates())
        .count();
    assert_eq!(eliminating, report.eliminations);
    // The accumulator is exactly the sum of the event deltas.
    let total: f64 = report.events.iter().map(|event| event.log_delta).sum();
    assert_close(total, report.log_tau);
}

#[test]
fn entropy_is_a_pure_ratio() {
    assert_close(entropy(6.0, 3), 2.0);
    assert_close(entropy(1.5, 0), 0.0);
}
