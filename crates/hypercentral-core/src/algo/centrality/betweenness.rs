//! Betweenness centrality: measuring brokerage and bridging.
//!
//! # Intuition
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other nodes. On a hypergraph, paths hop from node to node through shared
//! hyperedges, so the computation runs on the clique expansion.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! # Brandes' Algorithm (2001)
//!
//! 1. Run BFS from each source s
//! 2. Track σ_sv (shortest path counts) during forward pass
//! 3. Accumulate dependencies δ_s(v) during backward pass
//!
//! ```text
//! δ_s(v) = Σ_{w: v∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! The clique expansion is undirected, so every pair is seen from both ends
//! and the raw sums are halved before normalization.
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Freeman (1977). "A set of measures of centrality based on betweenness"

use super::{by_node, normalize};
use crate::{Hypergraph, NodeId};
use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::VecDeque;

/// Compute betweenness centrality using Brandes' algorithm.
///
/// Graphs with no brokers at all (complete graphs, single edges) get the
/// uniform distribution.
///
/// # Complexity
///
/// - Time: O(V E') for the clique expansion's E' edges
/// - Space: O(V + E')
///
/// # Example
///
/// ```
/// use hypercentral_core::{Hypergraph, NodeId};
/// use hypercentral_core::algo::centrality::betweenness_centrality;
///
/// // 2 is the only way between the two hyperedges
/// let hg = Hypergraph::from_edges(vec![vec![1, 2], vec![2, 3, 4]])?;
/// let scores = betweenness_centrality(&hg);
/// assert!((scores[&NodeId::from(2)] - 1.0).abs() < 1e-12);
/// # Ok::<(), hypercentral_core::Error>(())
/// ```
#[must_use]
pub fn betweenness_centrality(hg: &Hypergraph) -> IndexMap<NodeId, f64> {
    let graph = hg.clique_expansion();
    let n = graph.node_count();
    let mut betweenness = vec![0.0_f64; n];

    for s in graph.node_indices() {
        let (sigma, predecessors, order) = bfs_shortest_paths(&graph, s);

        let mut delta = vec![0.0_f64; n];

        // Process nodes in reverse BFS order (farthest first)
        for &w in order.iter().rev() {
            let w_idx = w.index();
            for &v in &predecessors[w_idx] {
                let v_idx = v.index();
                let coeff = sigma[v_idx] / sigma[w_idx];
                delta[v_idx] += coeff * (1.0 + delta[w_idx]);
            }
            if w != s {
                betweenness[w_idx] += delta[w_idx];
            }
        }
    }

    // Each path is counted from both ends
    for b in &mut betweenness {
        *b /= 2.0;
    }

    normalize(&mut betweenness);
    by_node(hg, betweenness)
}

/// BFS to find shortest paths from source.
///
/// Returns:
/// - sigma: σ_sv = number of shortest paths from s to v
/// - predecessors: P_s(v) = predecessors on shortest paths
/// - order: nodes in BFS order (for backward pass)
fn bfs_shortest_paths(
    graph: &UnGraph<usize, ()>,
    source: NodeIndex,
) -> (Vec<f64>, Vec<Vec<NodeIndex>>, Vec<NodeIndex>) {
    let n = graph.node_count();
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i32; n];
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source.index()] = 1.0;
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let v_idx = v.index();
        let v_dist = dist[v_idx];

        for w in graph.neighbors(v) {
            let w_idx = w.index();

            if dist[w_idx] < 0 {
                dist[w_idx] = v_dist + 1;
                queue.push_back(w);
            }

            if dist[w_idx] == v_dist + 1 {
                sigma[w_idx] += sigma[v_idx];
                predecessors[w_idx].push(v);
            }
        }
    }

    (sigma, predecessors, order)
}
