//! Hypercoreness: depth in the (k, m)-core decomposition.
//!
//! The (k, m)-core is the largest sub-hypergraph in which every node belongs
//! to at least `k` hyperedges of size at least `m`, sizes measured inside the
//! sub-hypergraph. Peeling a node shrinks every edge it belonged to, which
//! may push those edges below `m` and lower their members' degrees in turn.
//!
//! ```text
//! C_m(v) = max { k : v ∈ (k, m)-core }
//! R(v)   = Σ_{m=2}^{M} C_m(v) / max_u C_m(u)
//! ```
//!
//! # References
//!
//! - Mancastroppa, Iacopini, Petri & Barrat (2023). "Hyper-cores promote
//!   localization and efficient seeding in higher-order processes"

use super::{by_node, normalize};
use crate::hypergraph::Incidence;
use crate::{Hypergraph, NodeId};
use indexmap::IndexMap;

/// Compute hypercoreness for all nodes.
///
/// # Example
///
/// ```
/// use hypercentral_core::{Hypergraph, NodeId};
/// use hypercentral_core::algo::centrality::hypercoreness;
///
/// let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![1, 2], vec![3, 4]])?;
/// let scores = hypercoreness(&hg);
/// assert!(scores[&NodeId::from(1)] > scores[&NodeId::from(4)]);
/// # Ok::<(), hypercentral_core::Error>(())
/// ```
#[must_use]
pub fn hypercoreness(hg: &Hypergraph) -> IndexMap<NodeId, f64> {
    let inc = hg.incidence();
    let n = inc.num_nodes();
    let max_size = hg.max_edge_size();
    let mut scores = vec![0.0; n];

    for m in 2..=max_size {
        let shells = m_shells(&inc, m);
        let k_max = shells.iter().copied().max().unwrap_or(0);
        if k_max == 0 {
            continue;
        }
        for (score, &k) in scores.iter_mut().zip(&shells) {
            *score += k as f64 / k_max as f64;
        }
    }

    normalize(&mut scores);
    by_node(hg, scores)
}

/// Core number of every node in the (k, m) decomposition for a fixed `m`.
fn m_shells(inc: &Incidence, m: usize) -> Vec<usize> {
    let n = inc.num_nodes();
    let mut node_alive = vec![true; n];
    let mut edge_size: Vec<usize> = inc.edge_nodes.iter().map(Vec::len).collect();
    let mut edge_alive: Vec<bool> = edge_size.iter().map(|&s| s >= m).collect();
    let mut degree: Vec<usize> = inc
        .node_edges
        .iter()
        .map(|edges| edges.iter().filter(|&&e| edge_alive[e]).count())
        .collect();

    let mut shell = vec![0; n];
    let mut remaining = n;
    let mut k = 1;

    while remaining > 0 {
        let mut stack: Vec<usize> = (0..n)
            .filter(|&v| node_alive[v] && degree[v] < k)
            .collect();

        while let Some(v) = stack.pop() {
            if !node_alive[v] {
                continue;
            }
            node_alive[v] = false;
            remaining -= 1;
            shell[v] = k - 1;

            for &e in &inc.node_edges[v] {
                if !edge_alive[e] {
                    continue;
                }
                edge_size[e] -= 1;
                if edge_size[e] < m {
                    edge_alive[e] = false;
                    for &u in &inc.edge_nodes[e] {
                        if node_alive[u] {
                            degree[u] -= 1;
                            if degree[u] < k {
                                stack.push(u);
                            }
                        }
                    }
                }
            }
        }

        k += 1;
    }

    shell
}
