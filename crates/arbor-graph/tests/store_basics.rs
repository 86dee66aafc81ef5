use arbor_core::{ArborError, NodeId};
use arbor_graph::Multigraph;

fn id(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

#[test]
fn add_edge_updates_degrees_and_counts() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();

    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, 2.0).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree(a).unwrap(), 1);
    assert_eq!(graph.degree(b).unwrap(), 2);
    assert_eq!(graph.neighbors(b).unwrap(), vec![a, c]);
    assert_eq!(graph.edge_weight(b, c).unwrap(), 2.0);
}

#[test]
fn self_loops_are_rejected() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let err = graph.add_edge(a, a, 1.0).unwrap_err();
    assert_eq!(err.code(), "self-loop");
    assert!(matches!(err, ArborError::Input(_)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn nonpositive_and_nan_weights_are_rejected() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    for bad in [0.0, -1.5, f64::NAN] {
        let err = graph.add_edge(a, b, bad).unwrap_err();
        assert_eq!(err.code(), "nonpositive-weight");
    }
}

#[test]
fn unknown_nodes_are_structured_errors() {
    let graph = Multigraph::new();
    let err = graph.degree(id(5)).unwrap_err();
    assert_eq!(err.code(), "unknown-node");
    assert_eq!(err.info().context.get("node"), Some(&"5".to_string()));
}

#[test]
fn parallel_edges_coexist_until_merged() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, b, 2.0).unwrap();
    graph.add_edge(a, b, 3.0).unwrap();

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.parallel_count(a, b).unwrap(), 3);
    // Degree counts distinct neighbors, not incident edges.
    assert_eq!(graph.degree(a).unwrap(), 1);
    assert_eq!(graph.parallel_pairs(), vec![(a, b)]);

    assert!(graph.merge_parallel(a, b).unwrap());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(a, b).unwrap(), 6.0);
    // A second merge is a no-op.
    assert!(!graph.merge_parallel(a, b).unwrap());
}

#[test]
fn remove_node_drops_incident_edges_and_tombstones() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();

    graph.remove_node(b).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains_node(b));
    assert_eq!(graph.degree(a).unwrap(), 0);
    assert_eq!(graph.remove_node(b).unwrap_err().code(), "unknown-node");
    // The slot stays tombstoned.
    assert_eq!(graph.ensure_node(b).unwrap_err().code(), "node-removed");
}

#[test]
fn from_triples_builds_the_slots_it_references() {
    let graph = Multigraph::from_triples([
        (id(0), id(2), 1.0),
        (id(2), id(5), 0.5),
        (id(0), id(5), 2.0),
    ])
    .unwrap();
    // Slots 1, 3, 4 exist but carry no edges.
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.degree(id(2)).unwrap(), 2);
    assert_eq!(graph.degree(id(1)).unwrap(), 0);

    let err = Multigraph::from_triples([(id(1), id(1), 1.0)]).unwrap_err();
    assert_eq!(err.code(), "self-loop");
}

#[test]
fn degree_index_tracks_min_degree_candidates() {
    let mut graph = Multigraph::new();
    // Star: node 0 with four leaves, so 0 is the only node above degree 3.
    let center = graph.add_node();
    let leaves: Vec<_> = (0..4).map(|_| graph.add_node()).collect();
    for leaf in &leaves {
        graph.add_edge(center, *leaf, 1.0).unwrap();
    }

    assert_eq!(graph.min_degree_node_above(3), Some((center, 4)));
    assert_eq!(graph.min_degree_node_above(4), None);
    assert_eq!(graph.nodes_with_degree(1), leaves);
    assert_eq!(graph.nodes_with_degree(2), Vec::<NodeId>::new());

    // Removing a leaf drops the center to degree 3.
    graph.remove_node(leaves[0]).unwrap();
    assert_eq!(graph.min_degree_node_above(3), None);
    assert_eq!(graph.nodes_with_degree(3), vec![center]);
}

#[test]
fn min_degree_ties_break_by_smallest_id() {
    let mut graph = Multigraph::new();
    // Two degree-4 hubs sharing the same leaves; the smaller id must win.
    let hub_a = graph.add_node();
    let hub_b = graph.add_node();
    for _ in 0..4 {
        let leaf = graph.add_node();
        graph.add_edge(hub_a, leaf, 1.0).unwrap();
        graph.add_edge(hub_b, leaf, 1.0).unwrap();
    }
    assert_eq!(graph.min_degree_node_above(3), Some((hub_a, 4)));
}

#[test]
fn add_clique_applies_the_pairwise_formula() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    let added = graph
        .add_clique(&[(a, 1.0), (b, 2.0), (c, 3.0)], 6.0)
        .unwrap();
    assert_eq!(added, 3);
    assert_eq!(graph.edge_weight(a, b).unwrap(), 2.0 / 6.0);
    assert_eq!(graph.edge_weight(a, c).unwrap(), 3.0 / 6.0);
    assert_eq!(graph.edge_weight(b, c).unwrap(), 6.0 / 6.0);
}
