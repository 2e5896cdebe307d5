//! Centrality algorithms for measuring node and edge importance.
//!
//! # Overview
//!
//! Every routine here scores the *nodes* of a hypergraph. Edge scores come
//! from running the same routine on [`Hypergraph::dual`], where each edge is a
//! node. [`line_expansion_degree_centrality`] and [`node_edge_centrality`]
//! score both sides in one pass and return a pair.
//!
//! | Measure | Works on | Reference |
//! |---------|----------|-----------|
//! | Degree | incidence | Faust (1997) |
//! | Line-expansion degree | line expansion | Yang et al. (2020) |
//! | Closeness | clique expansion | Wasserman & Faust (1994) |
//! | Harmonic | clique expansion | Boldi & Vigna (2014) |
//! | Betweenness | clique expansion | Brandes (2001) |
//! | Eigenvector | clique expansion | Bonacich (1972) |
//! | PageRank | hypergraph random walk | Chitra & Raphael (2019) |
//! | Hypercoreness | (k, m)-cores | Mancastroppa et al. (2023) |
//! | Node-edge | incidence | Tudisco & Higham (2021) |
//!
//! # Normalization
//!
//! All measures are L1-normalized: scores over all entities sum to 1. When a
//! measure cannot tell entities apart (every raw score is zero, e.g.
//! betweenness on a complete graph) the result is uniform. The one
//! exception is node-edge centrality on a disconnected hypergraph, which is
//! undefined and reported as NaN.
//!
//! # Convergence
//!
//! Iterative measures stop at `max_iterations` without failing. A warning is
//! logged and the current estimate is returned.

mod betweenness;
mod closeness;
mod degree;
mod eigenvector;
mod hypercoreness;
mod node_edge;
mod pagerank;

pub use betweenness::betweenness_centrality;
pub use closeness::{closeness_centrality, harmonic_centrality};
pub use degree::{degree_centrality, line_expansion_degree_centrality};
pub use eigenvector::{eigenvector_centrality, EigenvectorConfig};
pub use hypercoreness::hypercoreness;
pub use node_edge::{node_edge_centrality, NodeEdgeConfig};
pub use pagerank::{pagerank, PageRankConfig};

use crate::{EdgeId, Hypergraph, NodeId};
use indexmap::IndexMap;
use std::fmt;

/// Which entity type a statistic scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    #[default]
    Node,
    Edge,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Node => "node",
            Target::Edge => "edge",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scale scores in place so they sum to 1.
///
/// All-zero (or non-finite) totals fall back to the uniform distribution.
pub(crate) fn normalize(scores: &mut [f64]) {
    if scores.is_empty() {
        return;
    }
    let total: f64 = scores.iter().sum();
    if total > 0.0 && total.is_finite() {
        for s in scores.iter_mut() {
            *s /= total;
        }
    } else {
        let uniform = 1.0 / scores.len() as f64;
        scores.fill(uniform);
    }
}

/// Attach node IDs to positional scores.
pub(crate) fn by_node(hg: &Hypergraph, scores: Vec<f64>) -> IndexMap<NodeId, f64> {
    hg.node_ids().cloned().zip(scores).collect()
}

/// Attach edge IDs to positional scores.
pub(crate) fn by_edge(hg: &Hypergraph, scores: Vec<f64>) -> IndexMap<EdgeId, f64> {
    hg.edge_ids().cloned().zip(scores).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sums_to_one() {
        let mut s = vec![1.0, 3.0];
        normalize(&mut s);
        assert!((s[0] - 0.25).abs() < 1e-12);
        assert!((s[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_uniform() {
        let mut s = vec![0.0; 4];
        normalize(&mut s);
        assert!(s.iter().all(|&x| (x - 0.25).abs() < 1e-12));
    }

    #[test]
    fn test_target_names() {
        assert_eq!(Target::default(), Target::Node);
        assert_eq!(Target::Node.to_string(), "node");
        assert_eq!(Target::Edge.as_str(), "edge");
    }
}
