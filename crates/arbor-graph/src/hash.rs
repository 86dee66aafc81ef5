use sha2::{Digest, Sha256};

use crate::multigraph::Multigraph;

/// Computes the canonical structural hash of the multigraph.
///
/// The hash covers the alive-node census and every stored edge (parallel
/// copies included) as sorted `(u, v, weight-bits)` triples, so two graphs
/// hash equal exactly when their structure and weights coincide bit for
/// bit.
pub fn canonical_hash(graph: &Multigraph) -> String {
    let mut hasher = Sha256::new();

    let flags = graph.alive_flags();
    hasher.update((flags.len() as u64).to_le_bytes());
    for alive in flags {
        hasher.update([alive as u8]);
    }

    let mut triples = graph.edge_triples();
    triples.sort_by(|(ua, va, wa), (ub, vb, wb)| {
        (ua, va, wa.to_bits()).cmp(&(ub, vb, wb.to_bits()))
    });
    hasher.update((triples.len() as u64).to_le_bytes());
    for (u, v, weight) in triples {
        hasher.update(u.as_raw().to_le_bytes());
        hasher.update(v.as_raw().to_le_bytes());
        hasher.update(weight.to_bits().to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
