use arbor_graph::{
    canonical_hash, gen_complete, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json,
    Multigraph,
};

#[test]
fn bytes_roundtrip_preserves_structure() {
    let mut graph = gen_complete(5).unwrap();
    // Leave a tombstone and a parallel bundle behind to exercise both.
    let nodes = graph.nodes();
    graph.remove_node(nodes[4]).unwrap();
    graph.add_edge(nodes[0], nodes[1], 2.5).unwrap();

    let bytes = graph_to_bytes(&graph).unwrap();
    let restored = graph_from_bytes(&bytes).unwrap();

    assert_eq!(canonical_hash(&graph), canonical_hash(&restored));
    assert_eq!(graph.node_count(), restored.node_count());
    assert_eq!(graph.edge_count(), restored.edge_count());
    assert!(!restored.contains_node(nodes[4]));
}

#[test]
fn json_roundtrip_preserves_weights_exactly() {
    let mut graph = Multigraph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    graph.add_edge(a, b, 0.1 + 0.2).unwrap();

    let json = graph_to_json(&graph).unwrap();
    let restored = graph_from_json(&json).unwrap();
    assert_eq!(
        graph.edge_weight(a, b).unwrap().to_bits(),
        restored.edge_weight(a, b).unwrap().to_bits()
    );
}

#[test]
fn corrupt_payloads_surface_structured_errors() {
    let err = graph_from_json("{\"not\": \"a graph\"}").unwrap_err();
    assert_eq!(err.code(), "deserialize-json");

    let err = graph_from_bytes(&[0xff, 0x00, 0x13]).unwrap_err();
    assert_eq!(err.code(), "deserialize-bytes");
}
