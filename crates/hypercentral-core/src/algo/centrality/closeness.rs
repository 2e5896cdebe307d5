//! Closeness and harmonic centrality: proximity to all other nodes.
//!
//! # Intuition
//!
//! Closeness measures how quickly information can spread from a node. Two
//! nodes are one hop apart when they share a hyperedge, so distances are
//! taken on the clique expansion.
//!
//! # Handling Disconnected Hypergraphs
//!
//! | Variant | Formula | Behavior |
//! |---------|---------|----------|
//! | **Wasserman-Faust** | (r/(n-1)) · (r/Σd) | Scales by reachable fraction |
//! | **Harmonic** | Σ_{u≠v} 1/d(v,u) | Ignore unreachable (d=∞ → 0) |
//!
//! [`closeness_centrality`] uses Wasserman-Faust, [`harmonic_centrality`]
//! the harmonic sum. Both are then normalized to sum to 1.
//!
//! # References
//!
//! - Wasserman & Faust (1994). "Social Network Analysis"
//! - Boldi & Vigna (2014). "Axioms for centrality"

use super::{by_node, normalize};
use crate::{Hypergraph, NodeId};
use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::VecDeque;

/// Compute closeness centrality for all nodes.
///
/// # Complexity
///
/// - Time: O(V(V + E')) where E' is the clique-expansion edge count
/// - Space: O(V + E')
#[must_use]
pub fn closeness_centrality(hg: &Hypergraph) -> IndexMap<NodeId, f64> {
    let graph = hg.clique_expansion();
    let n = graph.node_count();

    let mut scores: Vec<f64> = graph
        .node_indices()
        .map(|source| {
            let distances = bfs_distances(&graph, source);
            let (reachable, total) = distances
                .iter()
                .enumerate()
                .filter(|&(i, &d)| i != source.index() && d > 0)
                .fold((0usize, 0usize), |(r, t), (_, &d)| (r + 1, t + d as usize));

            if total == 0 || n < 2 {
                0.0
            } else {
                let r = reachable as f64;
                (r / (n - 1) as f64) * (r / total as f64)
            }
        })
        .collect();

    normalize(&mut scores);
    by_node(hg, scores)
}

/// Compute harmonic centrality for all nodes.
#[must_use]
pub fn harmonic_centrality(hg: &Hypergraph) -> IndexMap<NodeId, f64> {
    let graph = hg.clique_expansion();

    let mut scores: Vec<f64> = graph
        .node_indices()
        .map(|source| {
            bfs_distances(&graph, source)
                .iter()
                .enumerate()
                .filter(|&(i, &d)| i != source.index() && d > 0)
                .map(|(_, &d)| 1.0 / f64::from(d))
                .sum()
        })
        .collect();

    normalize(&mut scores);
    by_node(hg, scores)
}

/// BFS to find distances from source.
///
/// Returns distance array. -1 means unreachable, 0 means self.
pub(super) fn bfs_distances(graph: &UnGraph<usize, ()>, source: NodeIndex) -> Vec<i32> {
    let n = graph.node_count();
    let mut dist = vec![-1_i32; n];
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let v_dist = dist[v.index()];
        for w in graph.neighbors(v) {
            if dist[w.index()] < 0 {
                dist[w.index()] = v_dist + 1;
                queue.push_back(w);
            }
        }
    }

    dist
}
