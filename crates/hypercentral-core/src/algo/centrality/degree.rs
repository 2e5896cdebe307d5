//! Degree centrality and its line-expansion variant.
//!
//! # Intuition
//!
//! Degree centrality counts memberships: a node in many hyperedges is
//! well connected. On the dual it counts members, so large edges score high.
//!
//! # Normalization
//!
//! ```text
//! C_D(v) = deg(v) / Σ_u deg(u)
//! ```
//!
//! # Line expansion
//!
//! The line expansion turns every incidence `(v, e)` into a vertex, joined to
//! every other incidence sharing `v` or sharing `e`. Its degree is
//!
//! ```text
//! d(v, e) = (deg(v) - 1) + (|e| - 1)
//! ```
//!
//! A node scores the sum over its incidences, and so does an edge, so a
//! single pass yields both sides.
//!
//! # References
//!
//! - Faust (1997). "Centrality in affiliation networks"
//! - Yang et al. (2020). "Hypergraph learning with line expansion"

use super::{by_edge, by_node, normalize};
use crate::{EdgeId, Hypergraph, NodeId};
use indexmap::IndexMap;

/// Compute degree centrality for all nodes.
///
/// # Example
///
/// ```
/// use hypercentral_core::{Hypergraph, NodeId};
/// use hypercentral_core::algo::centrality::degree_centrality;
///
/// let hg = Hypergraph::from_edges(vec![vec![1, 2], vec![2, 3]])?;
/// let scores = degree_centrality(&hg);
/// assert!((scores[&NodeId::from(2)] - 0.5).abs() < 1e-12);
/// # Ok::<(), hypercentral_core::Error>(())
/// ```
#[must_use]
pub fn degree_centrality(hg: &Hypergraph) -> IndexMap<NodeId, f64> {
    let inc = hg.incidence();
    let mut scores: Vec<f64> = inc.node_edges.iter().map(|e| e.len() as f64).collect();
    normalize(&mut scores);
    by_node(hg, scores)
}

/// Compute line-expansion degree centrality for nodes and edges at once.
#[must_use]
pub fn line_expansion_degree_centrality(
    hg: &Hypergraph,
) -> (IndexMap<NodeId, f64>, IndexMap<EdgeId, f64>) {
    let inc = hg.incidence();
    let mut node_scores = vec![0.0; inc.num_nodes()];
    let mut edge_scores = vec![0.0; inc.num_edges()];

    for (e, members) in inc.edge_nodes.iter().enumerate() {
        let size = members.len();
        for &v in members {
            let deg = inc.node_edges[v].len();
            let d = ((deg - 1) + (size - 1)) as f64;
            node_scores[v] += d;
            edge_scores[e] += d;
        }
    }

    normalize(&mut node_scores);
    normalize(&mut edge_scores);
    (by_node(hg, node_scores), by_edge(hg, edge_scores))
}
