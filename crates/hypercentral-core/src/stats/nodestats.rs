//! Node-level statistics.
//!
//! Each function maps the nodes of `bunch` to a value. Centralities are run
//! on the whole hypergraph and then restricted, so a node's score does not
//! depend on which other nodes were requested.

use super::{restrict, AttrStat, Measure, StatMap};
use crate::algo::centrality;
use crate::{Error, Hypergraph, NodeId, Result};
use serde_json::Value;

/// Node attributes.
///
/// With `attr = None` every node's full record is returned as-is. With a
/// name, that single attribute is returned and `missing` is imputed for nodes
/// that lack it.
pub fn attrs(
    hg: &Hypergraph,
    bunch: &[NodeId],
    attr: Option<&str>,
    missing: Value,
) -> Result<AttrStat<NodeId>> {
    let record = |id: &NodeId| {
        hg.node_attrs(id)
            .ok_or_else(|| Error::NodeNotFound(id.0.clone()))
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

/// Node degree: the number of edges containing the node.
///
/// With `order`, only edges of size `order + 1` are counted.
pub fn degree(
    hg: &Hypergraph,
    bunch: &[NodeId],
    order: Option<usize>,
) -> Result<StatMap<NodeId, usize>> {
    bunch
        .iter()
        .map(|id| {
            let memberships = hg
                .memberships(id)
                .ok_or_else(|| Error::NodeNotFound(id.0.clone()))?;
            let count = match order {
                None => memberships.len(),
                Some(order) => memberships
                    .iter()
                    .filter(|e| hg.edge_size(e) == Some(order + 1))
                    .count(),
            };
            Ok((id.clone(), count))
        })
        .collect()
}

/// Node centrality under `measure`, restricted to `bunch`.
///
/// IDs in `bunch` that are not nodes of `hg` are skipped.
pub fn centrality(hg: &Hypergraph, bunch: &[NodeId], measure: &Measure) -> StatMap<NodeId, f64> {
    let full = match *measure {
        Measure::Degree => centrality::degree_centrality(hg),
        Measure::LineExpansionDegree => centrality::line_expansion_degree_centrality(hg).0,
        Measure::Closeness => centrality::closeness_centrality(hg),
        Measure::Betweenness => centrality::betweenness_centrality(hg),
        Measure::Harmonic => centrality::harmonic_centrality(hg),
        Measure::Eigenvector(config) => centrality::eigenvector_centrality(hg, config),
        Measure::PageRank(config) => centrality::pagerank(hg, config),
        Measure::Hypercoreness => centrality::hypercoreness(hg),
        Measure::NodeEdge(config) => centrality::node_edge_centrality(hg, config).0,
    };
    restrict(full, bunch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colored() -> Hypergraph {
        let mut hg = Hypergraph::from_edges(vec![vec![1, 2], vec![2, 3, 4]]).unwrap();
        hg.set_node_attr(&NodeId::from(1), "color", "red").unwrap();
        hg.set_node_attr(&NodeId::from(2), "color", "blue").unwrap();
        hg.set_node_attr(&NodeId::from(2), "age", 30).unwrap();
        hg
    }

    fn all(hg: &Hypergraph) -> Vec<NodeId> {
        hg.node_ids().cloned().collect()
    }

    #[test]
    fn test_attrs_single_imputes_missing() {
        let hg = colored();
        let got = attrs(&hg, &all(&hg), Some("color"), json!("none")).unwrap();
        let AttrStat::Single(values) = got else {
            panic!("expected single attribute");
        };
        assert_eq!(values[&NodeId::from(1)], json!("red"));
        assert_eq!(values[&NodeId::from(3)], json!("none"));
    }

    #[test]
    fn test_attrs_all_records() {
        let hg = colored();
        let got = attrs(&hg, &[NodeId::from(2), NodeId::from(4)], None, Value::Null).unwrap();
        let AttrStat::All(records) = got else {
            panic!("expected full records");
        };
        assert_eq!(records[&NodeId::from(2)].len(), 2);
        assert!(records[&NodeId::from(4)].is_empty());
    }

    #[test]
    fn test_attrs_unknown_node() {
        let hg = colored();
        let err = attrs(&hg, &[NodeId::from(99)], None, Value::Null).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(id) if id == "99"));
    }

    #[test]
    fn test_degree_with_order() {
        let hg = colored();
        let bunch = all(&hg);
        let d = degree(&hg, &bunch, None).unwrap();
        assert_eq!(d[&NodeId::from(2)], 2);

        // only the 3-node edge has order 2
        let d2 = degree(&hg, &bunch, Some(2)).unwrap();
        assert_eq!(d2[&NodeId::from(2)], 1);
        assert_eq!(d2[&NodeId::from(1)], 0);
    }

    #[test]
    fn test_centrality_restricts_to_bunch() {
        let hg = colored();
        let bunch = vec![NodeId::from(4), NodeId::from(2), NodeId::from("ghost")];
        let scores = centrality(&hg, &bunch, &Measure::Degree);

        let keys: Vec<_> = scores.keys().map(NodeId::as_str).collect();
        assert_eq!(keys, vec!["2", "4"]);
    }

    #[test]
    fn test_node_pagerank_differs_from_eigenvector() {
        let hg = Hypergraph::from_edges(vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]])
            .unwrap();
        let bunch = all(&hg);
        let pr = centrality(&hg, &bunch, &"pagerank".parse().unwrap());
        let ev = centrality(&hg, &bunch, &"eigenvector".parse().unwrap());
        let differs = bunch.iter().any(|id| (pr[id] - ev[id]).abs() > 1e-6);
        assert!(differs);
    }
}
