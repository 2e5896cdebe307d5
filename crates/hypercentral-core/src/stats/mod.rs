//! Node and edge statistics.
//!
//! A statistic maps every entity of a caller-chosen subset (the *bunch*) to a
//! value. Statistics are computed from the hypergraph's current state on
//! every call and never cached.
//!
//! Centralities are selected with [`Measure`], a tagged union carrying each
//! measure's parameters. [`nodestats::centrality`] and
//! [`edgestats::centrality`] map a measure to the routine for their target.
//!
//! ```rust
//! use hypercentral_core::stats::{nodestats, Measure};
//! use hypercentral_core::{Hypergraph, NodeId};
//!
//! let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![3, 4]])?;
//! let bunch = vec![NodeId::from(3), NodeId::from(4)];
//!
//! let scores = nodestats::centrality(&hg, &bunch, &"pagerank".parse::<Measure>()?);
//! assert_eq!(scores.len(), 2);
//! # Ok::<(), hypercentral_core::Error>(())
//! ```

pub mod edgestats;
pub mod nodestats;

use crate::algo::centrality::{EigenvectorConfig, NodeEdgeConfig, PageRankConfig};
use crate::{Attrs, Error};
use indexmap::IndexMap;
use ndarray::Array1;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Entity -> value mapping, in hypergraph order.
pub type StatMap<K, V> = IndexMap<K, V>;

/// Result of an attribute lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrStat<K: Hash + Eq> {
    /// Full attribute records (nothing imputed).
    All(StatMap<K, Attrs>),
    /// One attribute per entity, with the `missing` value imputed.
    Single(StatMap<K, Value>),
}

/// A centrality measure and its parameters.
#[derive(Debug, Clone, Copy)]
pub enum Measure {
    Degree,
    LineExpansionDegree,
    Closeness,
    Betweenness,
    Harmonic,
    Eigenvector(EigenvectorConfig),
    PageRank(PageRankConfig),
    Hypercoreness,
    NodeEdge(NodeEdgeConfig),
}

impl Measure {
    /// Every name accepted by [`Measure::from_str`].
    pub const ALL_NAMES: [&'static str; 9] = [
        "degree",
        "line_expansion_degree",
        "closeness",
        "betweenness",
        "harmonic",
        "eigenvector",
        "pagerank",
        "hypercoreness",
        "node_edge",
    ];

    /// Canonical name, as used in output file names.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Degree => "degree",
            Measure::LineExpansionDegree => "line_expansion_degree",
            Measure::Closeness => "closeness",
            Measure::Betweenness => "betweenness",
            Measure::Harmonic => "harmonic",
            Measure::Eigenvector(_) => "eigenvector",
            Measure::PageRank(_) => "pagerank",
            Measure::Hypercoreness => "hypercoreness",
            Measure::NodeEdge(_) => "node_edge",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = Error;

    /// Parse a measure name, using default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let measure = match s {
            "degree" => Measure::Degree,
            "line_expansion_degree" => Measure::LineExpansionDegree,
            "closeness" => Measure::Closeness,
            "betweenness" => Measure::Betweenness,
            "harmonic" => Measure::Harmonic,
            "eigenvector" => Measure::Eigenvector(EigenvectorConfig::default()),
            "pagerank" => Measure::PageRank(PageRankConfig::default()),
            "hypercoreness" => Measure::Hypercoreness,
            "node_edge" => Measure::NodeEdge(NodeEdgeConfig::default()),
            other => return Err(Error::InvalidMeasure(other.to_string())),
        };
        Ok(measure)
    }
}

/// Keep only the entries whose key is in `bunch`, preserving `full`'s order.
pub fn restrict<K, V>(full: StatMap<K, V>, bunch: &[K]) -> StatMap<K, V>
where
    K: Hash + Eq,
{
    let wanted: HashSet<&K> = bunch.iter().collect();
    full.into_iter()
        .filter(|(k, _)| wanted.contains(&k))
        .collect()
}

/// Dense array of `map`'s values in the order of `ids`.
///
/// IDs absent from the map contribute 0.0.
pub fn to_dense<'a, K>(map: &StatMap<K, f64>, ids: impl IntoIterator<Item = &'a K>) -> Array1<f64>
where
    K: Hash + Eq + 'a,
{
    ids.into_iter()
        .map(|id| map.get(id).copied().unwrap_or(0.0))
        .collect()
}
