//! `PageRank` on hypergraphs.
//!
//! A random walker at node `v` picks one of `v`'s hyperedges uniformly, then
//! one member of that hyperedge uniformly:
//!
//! ```text
//! P(v, u) = Σ_{e ∋ v, u} 1/deg(v) · 1/|e|
//! ```
//!
//! With probability `1 - damping` it teleports to a uniform node instead.
//! Isolated nodes have nowhere to go, so their mass is spread uniformly.
//!
//! # References
//!
//! - Page et al. (1999). "The PageRank citation ranking"
//! - Chitra & Raphael (2019). "Random walks on hypergraphs with edge-dependent
//!   vertex weights"

use super::by_node;
use crate::{Hypergraph, NodeId};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// `PageRank` configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor (probability of following an edge vs teleporting).
    /// Typically 0.85.
    pub damping_factor: f64,
    /// Maximum iterations before stopping.
    pub max_iterations: usize,
    /// Convergence tolerance (L1 norm of score changes).
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Compute `PageRank` for all nodes.
///
/// Returns a map of `NodeId` -> score, where scores sum to 1.0.
#[must_use]
pub fn pagerank(hg: &Hypergraph, config: PageRankConfig) -> IndexMap<NodeId, f64> {
    let inc = hg.incidence();
    let n = inc.num_nodes();
    if n == 0 {
        return IndexMap::new();
    }

    let nf = n as f64;
    let d = config.damping_factor;
    let mut scores = vec![1.0 / nf; n];
    let mut next = vec![0.0; n];
    let mut converged = false;

    for iter in 0..config.max_iterations {
        next.fill(0.0);
        let mut dangling = 0.0;

        for (v, edges) in inc.node_edges.iter().enumerate() {
            if edges.is_empty() {
                dangling += scores[v];
                continue;
            }
            let per_edge = scores[v] / edges.len() as f64;
            for &e in edges {
                let members = &inc.edge_nodes[e];
                let share = per_edge / members.len() as f64;
                for &u in members {
                    next[u] += share;
                }
            }
        }

        let base = (1.0 - d) / nf + d * dangling / nf;
        for s in &mut next {
            *s = base + d * *s;
        }

        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut scores, &mut next);

        if diff < config.tolerance {
            debug!(iterations = iter + 1, "pagerank converged");
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            max_iterations = config.max_iterations,
            "pagerank did not converge"
        );
    }

    by_node(hg, scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagerank_cycle() {
        let hg = Hypergraph::from_edges(vec![vec!["A", "B"], vec!["B", "C"], vec!["C", "A"]])
            .unwrap();
        let scores = pagerank(&hg, PageRankConfig::default());

        for score in scores.values() {
            assert!((score - 1.0 / 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pagerank_star() {
        let hg = Hypergraph::from_edges(vec![
            vec!["hub", "a"],
            vec!["hub", "b"],
            vec!["hub", "c"],
        ])
        .unwrap();
        let scores = pagerank(&hg, PageRankConfig::default());

        let hub = scores[&NodeId::from("hub")];
        let a = scores[&NodeId::from("a")];
        assert!(hub > a, "hub ({hub}) should outrank leaf ({a})");
    }

    #[test]
    fn test_pagerank_sums_to_one_with_isolated_node() {
        let mut hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![3, 4]]).unwrap();
        hg.add_node(5);
        let scores = pagerank(&hg, PageRankConfig::default());
        let total: f64 = scores.values().sum();

        assert!(
            (total - 1.0).abs() < 1e-6,
            "Scores should sum to 1.0, got {total}",
        );
    }

    #[test]
    fn test_pagerank_stops_at_iteration_cap() {
        let hg = Hypergraph::from_edges(vec![
            vec!["hub", "a"],
            vec!["hub", "b"],
            vec!["hub", "c"],
        ])
        .unwrap();
        let config = PageRankConfig {
            max_iterations: 1,
            tolerance: 0.0,
            ..PageRankConfig::default()
        };
        let scores = pagerank(&hg, config);

        // one step from uniform is already a distribution, not an error
        assert_eq!(scores.len(), 4);
        assert!((scores.values().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(scores[&NodeId::from("hub")] > scores[&NodeId::from("a")]);
    }
}
