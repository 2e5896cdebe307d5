//! Nonlinear node and edge eigenvector centrality.
//!
//! Nodes are important when they sit in important edges, and edges are
//! important when they hold important nodes. With incidence matrix `B` and
//! four monotone scalar functions:
//!
//! ```text
//! u  = x ∘ g(B f(y))          x' = u / ||u||₁
//! v  = y ∘ psi(Bᵀ phi(x))     y' = v / ||v||₁
//! ```
//!
//! iterated from uniform `x`, `y` until `||x' - x||₂ + ||y' - y||₂ < tol`.
//! The defaults `f = phi = x²`, `g = psi = √x` follow the paper.
//!
//! The fixed point only exists for connected hypergraphs. On a disconnected
//! or empty hypergraph every score is NaN.
//!
//! # References
//!
//! - Tudisco & Higham (2021). "Node and edge nonlinear eigenvector centrality
//!   for hypergraphs", <https://doi.org/10.1038/s42005-021-00704-2>

use super::{by_edge, by_node};
use crate::{EdgeId, Hypergraph, NodeId};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Configuration for node-edge centrality.
#[derive(Debug, Clone, Copy)]
pub struct NodeEdgeConfig {
    /// Applied to edge scores before summing into nodes.
    pub f: fn(f64) -> f64,
    /// Applied to the per-node sum.
    pub g: fn(f64) -> f64,
    /// Applied to node scores before summing into edges.
    pub phi: fn(f64) -> f64,
    /// Applied to the per-edge sum.
    pub psi: fn(f64) -> f64,
    /// Maximum iterations before stopping.
    pub max_iterations: usize,
    /// Total allowable change in node plus edge scores.
    pub tolerance: f64,
}

fn square(x: f64) -> f64 {
    x * x
}

impl Default for NodeEdgeConfig {
    fn default() -> Self {
        Self {
            f: square,
            g: f64::sqrt,
            phi: square,
            psi: f64::sqrt,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Compute node and edge centralities together.
///
/// # Example
///
/// ```
/// use hypercentral_core::{EdgeId, Hypergraph};
/// use hypercentral_core::algo::centrality::{node_edge_centrality, NodeEdgeConfig};
///
/// let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![3, 4]])?;
/// let (nodes, edges) = node_edge_centrality(&hg, NodeEdgeConfig::default());
///
/// assert!((nodes.values().sum::<f64>() - 1.0).abs() < 1e-9);
/// assert!(edges[&EdgeId::from(0)] > edges[&EdgeId::from(1)]);
/// # Ok::<(), hypercentral_core::Error>(())
/// ```
#[must_use]
pub fn node_edge_centrality(
    hg: &Hypergraph,
    config: NodeEdgeConfig,
) -> (IndexMap<NodeId, f64>, IndexMap<EdgeId, f64>) {
    let n = hg.num_nodes();
    let m = hg.num_edges();

    if n == 0 || m == 0 || !hg.is_connected() {
        warn!("node-edge centrality is undefined for disconnected hypergraphs");
        return (by_node(hg, vec![f64::NAN; n]), by_edge(hg, vec![f64::NAN; m]));
    }

    let inc = hg.incidence();
    let mut x = vec![1.0 / n as f64; n];
    let mut y = vec![1.0 / m as f64; m];
    let mut converged = false;

    for iter in 0..config.max_iterations {
        let fy: Vec<f64> = y.iter().map(|&v| (config.f)(v)).collect();
        let phix: Vec<f64> = x.iter().map(|&v| (config.phi)(v)).collect();

        let mut u: Vec<f64> = inc
            .node_edges
            .iter()
            .zip(&x)
            .map(|(edges, &xi)| xi * (config.g)(edges.iter().map(|&e| fy[e]).sum()))
            .collect();
        let mut v: Vec<f64> = inc
            .edge_nodes
            .iter()
            .zip(&y)
            .map(|(nodes, &ye)| ye * (config.psi)(nodes.iter().map(|&i| phix[i]).sum()))
            .collect();

        l1_normalize(&mut u);
        l1_normalize(&mut v);

        let check = l2_distance(&u, &x) + l2_distance(&v, &y);
        x = u;
        y = v;

        if check < config.tolerance {
            debug!(iterations = iter + 1, "node-edge centrality converged");
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            max_iterations = config.max_iterations,
            "node-edge centrality did not converge"
        );
    }

    (by_node(hg, x), by_edge(hg, y))
}

fn l1_normalize(values: &mut [f64]) {
    let norm: f64 = values.iter().map(|v| v.abs()).sum();
    for v in values.iter_mut() {
        *v /= norm;
    }
}

fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(p, q)| (p - q).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_edge_symmetric() {
        let hg = Hypergraph::from_edges(vec![vec![1, 2], vec![2, 3], vec![3, 1]]).unwrap();
        let (nodes, edges) = node_edge_centrality(&hg, NodeEdgeConfig::default());

        for score in nodes.values() {
            assert!((score - 1.0 / 3.0).abs() < 1e-6);
        }
        for score in edges.values() {
            assert!((score - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_node_edge_disconnected_is_nan() {
        let hg = Hypergraph::from_edges(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let (nodes, edges) = node_edge_centrality(&hg, NodeEdgeConfig::default());

        assert_eq!(nodes.len(), 4);
        assert_eq!(edges.len(), 2);
        assert!(nodes.values().all(|v| v.is_nan()));
        assert!(edges.values().all(|v| v.is_nan()));
    }

    #[test]
    fn test_node_edge_custom_functions() {
        let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![2, 3], vec![3, 4]]).unwrap();
        let config = NodeEdgeConfig {
            f: |x| x,
            g: |x| x,
            phi: |x| x,
            psi: |x| x,
            ..NodeEdgeConfig::default()
        };
        let (nodes, edges) = node_edge_centrality(&hg, config);

        assert!((nodes.values().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((edges.values().sum::<f64>() - 1.0).abs() < 1e-9);
        // node 3 sits in every edge
        let top = nodes
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(id, _)| id.clone());
        assert_eq!(top, Some(NodeId::from(3)));
    }

    #[test]
    fn test_node_edge_stops_at_iteration_cap() {
        let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![3, 4]]).unwrap();
        let config = NodeEdgeConfig {
            max_iterations: 1,
            tolerance: 0.0,
            ..NodeEdgeConfig::default()
        };
        let (nodes, edges) = node_edge_centrality(&hg, config);

        assert!(nodes.values().chain(edges.values()).all(|v| v.is_finite()));
        assert!((nodes.values().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((edges.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
