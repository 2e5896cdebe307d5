// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]

//! Hypergraphs and their centrality measures.
//!
//! A hypergraph generalizes a graph: an edge may join any non-empty set of
//! nodes instead of exactly two. This crate provides:
//!
//! - [`Hypergraph`] - insertion-ordered container with node/edge attributes
//! - [`algo::centrality`] - degree, closeness, betweenness, harmonic,
//!   eigenvector, PageRank, hypercoreness and node-edge centralities
//! - [`stats`] - per-node and per-edge statistics restricted to a "bunch"
//! - [`formats`] - XGI JSON datasets and `.npy` output
//!
//! # Centrality on edges
//!
//! Every node-targeted routine works on edges by running on the
//! [dual](Hypergraph::dual), where edges become nodes. The two exceptions
//! compute both sides at once: line-expansion degree and the Tudisco-Higham
//! node-edge centrality.
//!
//! # Example
//!
//! ```rust
//! use hypercentral_core::stats::{edgestats, Measure};
//! use hypercentral_core::{EdgeId, Hypergraph};
//!
//! let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![2, 3, 4, 5], vec![3, 4, 5]])?;
//! let bunch: Vec<EdgeId> = hg.edge_ids().cloned().collect();
//!
//! let order = edgestats::order(&hg, &bunch, None)?;
//! assert_eq!(order[&EdgeId::from(1)], 3);
//!
//! let measure: Measure = "degree".parse()?;
//! let scores = edgestats::centrality(&hg, &bunch, &measure);
//! let total: f64 = scores.values().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! # Ok::<(), hypercentral_core::Error>(())
//! ```

pub mod algo;
mod error;
pub mod formats;
mod hypergraph;
mod id;
pub mod stats;

pub use error::{Error, Result};
pub use hypergraph::{Attrs, Hypergraph};
pub use id::{EdgeId, NodeId};

// Re-export petgraph for callers working with the clique expansion
pub use petgraph;
