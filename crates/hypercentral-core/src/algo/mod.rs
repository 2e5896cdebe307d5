//! Algorithms over hypergraphs.
//!
//! # Centrality Overview
//!
//! | Algorithm | Question | Complexity |
//! |-----------|----------|------------|
//! | Degree | How many edges? | O(V) |
//! | Line-expansion degree | How many incidences nearby? | O(Σ\|e\|) |
//! | Closeness | How close to everyone? | O(V(V + E')) |
//! | Harmonic | Closeness, robust to disconnection | O(V(V + E')) |
//! | Betweenness | Bridge between communities? | O(V E') |
//! | Eigenvector | Connected to important nodes? | O(E' × iter) |
//! | PageRank | Random walk equilibrium? | O(Σ\|e\|² × iter) |
//! | Hypercoreness | How deep in the (k, m)-cores? | O(M Σ\|e\|) |
//! | Node-edge | Nonlinear joint eigenvector | O(Σ\|e\| × iter) |
//!
//! `E'` is the edge count of the clique expansion and `M` the largest edge size.

/// Centrality algorithms for nodes (and edges via the dual).
pub mod centrality;
