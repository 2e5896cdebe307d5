//! Edge-level statistics.
//!
//! Each function maps the edges of `bunch` to a value.
//!
//! ```rust
//! use hypercentral_core::stats::edgestats;
//! use hypercentral_core::{EdgeId, Hypergraph};
//!
//! let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![2, 3, 4, 5], vec![3, 4, 5]])?;
//! let bunch: Vec<EdgeId> = hg.edge_ids().cloned().collect();
//!
//! let order: Vec<i64> = edgestats::order(&hg, &bunch, None)?.into_values().collect();
//! assert_eq!(order, vec![2, 3, 2]);
//!
//! let size: Vec<usize> = edgestats::size(&hg, &bunch, None)?.into_values().collect();
//! assert_eq!(size, vec![3, 4, 3]);
//! # Ok::<(), hypercentral_core::Error>(())
//! ```
//!
//! # Known discrepancy
//!
//! `Measure::PageRank` on edges runs *eigenvector* centrality on the dual,
//! using the configured iteration cap and tolerance and ignoring the damping
//! factor.

use super::{restrict, AttrStat, Measure, StatMap};
use crate::algo::centrality::{self, EigenvectorConfig};
use crate::{EdgeId, Error, Hypergraph, NodeId, Result};
use indexmap::IndexSet;
use serde_json::Value;

/// Edge attributes.
///
/// With `attr = None` every edge's full record is returned as-is. With a
/// name, that single attribute is returned and `missing` is imputed for edges
/// that lack it.
pub fn attrs(
    hg: &Hypergraph,
    bunch: &[EdgeId],
    attr: Option<&str>,
    missing: Value,
) -> Result<AttrStat<EdgeId>> {
    let record = |id: &EdgeId| {
        hg.edge_attrs(id)
            .ok_or_else(|| Error::EdgeNotFound(id.0.clone()))
    };

    match attr {
        None => bunch
            .iter()
            .map(|id| Ok((id.clone(), record(id)?.clone())))
            .collect::<Result<_>>()
            .map(AttrStat::All),
        Some(name) => bunch
            .iter()
            .map(|id| {
                let value = record(id)?.get(name).cloned().unwrap_or_else(|| missing.clone());
                Ok((id.clone(), value))
            })
            .collect::<Result<_>>()
            .map(AttrStat::Single),
    }
}

/// Edge order: the number of members minus one.
///
/// With `degree`, only members whose own degree equals `degree` are counted,
/// and one is still subtracted, so an edge without such members has order -1.
pub fn order(
    hg: &Hypergraph,
    bunch: &[EdgeId],
    degree: Option<usize>,
) -> Result<StatMap<EdgeId, i64>> {
    bunch
        .iter()
        .map(|id| {
            let members = members_of(hg, id)?;
            Ok((id.clone(), count_members(hg, members, degree) as i64 - 1))
        })
        .collect()
}

/// Edge size: the number of members.
///
/// With `degree`, only members whose own degree equals `degree` are counted.
pub fn size(
    hg: &Hypergraph,
    bunch: &[EdgeId],
    degree: Option<usize>,
) -> Result<StatMap<EdgeId, usize>> {
    bunch
        .iter()
        .map(|id| {
            let members = members_of(hg, id)?;
            Ok((id.clone(), count_members(hg, members, degree)))
        })
        .collect()
}

fn members_of<'a>(hg: &'a Hypergraph, id: &EdgeId) -> Result<&'a IndexSet<NodeId>> {
    hg.members(id)
        .ok_or_else(|| Error::EdgeNotFound(id.0.clone()))
}

fn count_members(hg: &Hypergraph, members: &IndexSet<NodeId>, degree: Option<usize>) -> usize {
    match degree {
        None => members.len(),
        Some(d) => members.iter().filter(|n| hg.degree(n) == Some(d)).count(),
    }
}

/// Run a node routine on the dual and relabel its scores as edge scores.
fn on_dual<F>(hg: &Hypergraph, routine: F) -> StatMap<EdgeId, f64>
where
    F: FnOnce(&Hypergraph) -> StatMap<NodeId, f64>,
{
    routine(&hg.dual())
        .into_iter()
        .map(|(id, score)| (EdgeId::from(id), score))
        .collect()
}

/// Edge centrality under `measure`, restricted to `bunch`.
///
/// Node-edge and line-expansion degree centrality produce edge scores
/// directly; every other measure runs on the dual hypergraph.
pub fn centrality(hg: &Hypergraph, bunch: &[EdgeId], measure: &Measure) -> StatMap<EdgeId, f64> {
    let full = match *measure {
        Measure::NodeEdge(config) => centrality::node_edge_centrality(hg, config).1,
        Measure::LineExpansionDegree => centrality::line_expansion_degree_centrality(hg).1,
        Measure::Degree => on_dual(hg, centrality::degree_centrality),
        Measure::Closeness => on_dual(hg, centrality::closeness_centrality),
        Measure::Betweenness => on_dual(hg, centrality::betweenness_centrality),
        Measure::Harmonic => on_dual(hg, centrality::harmonic_centrality),
        Measure::Eigenvector(config) => {
            on_dual(hg, |dual| centrality::eigenvector_centrality(dual, config))
        }
        Measure::PageRank(config) => {
            let config = EigenvectorConfig {
                max_iterations: config.max_iterations,
                tolerance: config.tolerance,
            };
            on_dual(hg, |dual| centrality::eigenvector_centrality(dual, config))
        }
        Measure::Hypercoreness => on_dual(hg, centrality::hypercoreness),
    };
    restrict(full, bunch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::centrality::PageRankConfig;
    use serde_json::json;

    fn sample() -> Hypergraph {
        Hypergraph::from_edges(vec![vec![1, 2, 3], vec![2, 3, 4, 5], vec![3, 4, 5]]).unwrap()
    }

    fn all(hg: &Hypergraph) -> Vec<EdgeId> {
        hg.edge_ids().cloned().collect()
    }

    #[test]
    fn test_order_and_size() {
        let hg = sample();
        let bunch = all(&hg);
        let order = order(&hg, &bunch, None).unwrap();
        let size = size(&hg, &bunch, None).unwrap();

        assert_eq!(order.values().copied().collect::<Vec<_>>(), vec![2, 3, 2]);
        assert_eq!(size.values().copied().collect::<Vec<_>>(), vec![3, 4, 3]);
    }

    #[test]
    fn test_order_with_degree_keeps_minus_one() {
        let hg = sample();
        let bunch = all(&hg);
        // degrees: 1->1, 2->2, 3->3, 4->2, 5->2
        let order = order(&hg, &bunch, Some(2)).unwrap();
        assert_eq!(order.values().copied().collect::<Vec<_>>(), vec![0, 2, 1]);

        let none = order_of_missing_degree(&hg, &bunch);
        assert_eq!(none, vec![-1, -1, -1]);
    }

    fn order_of_missing_degree(hg: &Hypergraph, bunch: &[EdgeId]) -> Vec<i64> {
        order(hg, bunch, Some(10)).unwrap().into_values().collect()
    }

    #[test]
    fn test_size_with_degree() {
        let hg = sample();
        let size = size(&hg, &all(&hg), Some(2)).unwrap();
        assert_eq!(size.values().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn test_unknown_edge() {
        let hg = sample();
        let err = size(&hg, &[EdgeId::from("nope")], None).unwrap_err();
        assert!(matches!(err, Error::EdgeNotFound(id) if id == "nope"));
    }

    #[test]
    fn test_attrs_missing_value() {
        let mut hg = Hypergraph::new();
        hg.add_edge_with_id([0, 1], "one").unwrap();
        hg.add_edge_with_id([1, 2], "two").unwrap();
        hg.set_edge_attr(&EdgeId::from("one"), "color", "red").unwrap();
        hg.set_edge_attr(&EdgeId::from("two"), "age", 30).unwrap();

        let AttrStat::Single(ages) = attrs(&hg, &all(&hg), Some("age"), json!(100)).unwrap()
        else {
            panic!("expected single attribute");
        };
        assert_eq!(ages[&EdgeId::from("one")], json!(100));
        assert_eq!(ages[&EdgeId::from("two")], json!(30));
    }

    #[test]
    fn test_degree_centrality_is_size_share() {
        let hg = sample();
        let scores = centrality(&hg, &all(&hg), &Measure::Degree);
        assert!((scores[&EdgeId::from(1)] - 0.4).abs() < 1e-12);
        assert!((scores[&EdgeId::from(0)] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_edge_pagerank_runs_eigenvector() {
        let hg = sample();
        let bunch = all(&hg);
        let pagerank = centrality(
            &hg,
            &bunch,
            &Measure::PageRank(PageRankConfig {
                damping_factor: 0.5,
                ..PageRankConfig::default()
            }),
        );
        let eigen = centrality(&hg, &bunch, &"eigenvector".parse().unwrap());
        assert_eq!(pagerank, eigen);
    }

    #[test]
    fn test_every_measure_sums_to_one() {
        let hg = sample();
        let bunch = all(&hg);
        for name in Measure::ALL_NAMES {
            let measure: Measure = name.parse().unwrap();
            let total: f64 = centrality(&hg, &bunch, &measure).values().sum();
            assert!((total - 1.0).abs() < 1e-3, "{name}: {total}");
        }
    }
}
