//! Property-based tests for hypergraph statistics.
//!
//! These tests check invariants that hold for any hypergraph:
//! - Centralities are distributions over the scored entities
//! - Edge order and size agree
//! - Attribute lookups impute missing values
//! - Restricting to a bunch keeps exactly the requested entities

use hypercentral_core::stats::{edgestats, nodestats, AttrStat, Measure};
use hypercentral_core::{EdgeId, Hypergraph, NodeId};
use proptest::prelude::*;
use serde_json::json;

/// Hypergraphs with 1-8 edges over up to 12 nodes, each edge 1-5 members.
fn arb_hypergraph() -> impl Strategy<Value = Hypergraph> {
    prop::collection::vec(prop::collection::vec(0u32..12, 1..=5), 1..=8)
        .prop_map(|edges| Hypergraph::from_edges(edges).unwrap())
}

fn nodes(hg: &Hypergraph) -> Vec<NodeId> {
    hg.node_ids().cloned().collect()
}

fn edges(hg: &Hypergraph) -> Vec<EdgeId> {
    hg.edge_ids().cloned().collect()
}

mod centrality_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn node_scores_sum_to_one(hg in arb_hypergraph()) {
            let bunch = nodes(&hg);
            for name in Measure::ALL_NAMES {
                let measure: Measure = name.parse().unwrap();
                let scores = nodestats::centrality(&hg, &bunch, &measure);
                prop_assert_eq!(scores.len(), bunch.len());

                if name == "node_edge" && !hg.is_connected() {
                    prop_assert!(scores.values().all(|v| v.is_nan()));
                    continue;
                }
                let total: f64 = scores.values().sum();
                prop_assert!((total - 1.0).abs() < 1e-3, "{}: {}", name, total);
                prop_assert!(scores.values().all(|&v| v >= 0.0), "{} has negative scores", name);
            }
        }

        #[test]
        fn edge_scores_sum_to_one(hg in arb_hypergraph()) {
            let bunch = edges(&hg);
            for name in Measure::ALL_NAMES {
                let measure: Measure = name.parse().unwrap();
                let scores = edgestats::centrality(&hg, &bunch, &measure);
                prop_assert_eq!(scores.len(), bunch.len());

                if name == "node_edge" && !hg.is_connected() {
                    continue;
                }
                let total: f64 = scores.values().sum();
                prop_assert!((total - 1.0).abs() < 1e-3, "{}: {}", name, total);
            }
        }
    }
}

mod stat_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn order_is_size_minus_one(hg in arb_hypergraph()) {
            let bunch = edges(&hg);
            let order = edgestats::order(&hg, &bunch, None).unwrap();
            let size = edgestats::size(&hg, &bunch, None).unwrap();

            for id in &bunch {
                prop_assert_eq!(order[id], size[id] as i64 - 1);
            }
        }

        #[test]
        fn degree_sum_matches_sizes(hg in arb_hypergraph()) {
            let degrees = nodestats::degree(&hg, &nodes(&hg), None).unwrap();
            let sizes = edgestats::size(&hg, &edges(&hg), None).unwrap();
            prop_assert_eq!(degrees.values().sum::<usize>(), sizes.values().sum::<usize>());
        }

        #[test]
        fn attrs_impute_missing(hg in arb_hypergraph(), missing in -1000i64..1000) {
            let mut hg = hg;
            let bunch = nodes(&hg);
            let tagged: Vec<NodeId> = bunch.iter().step_by(2).cloned().collect();
            for id in &tagged {
                hg.set_node_attr(id, "x", "set").unwrap();
            }

            let AttrStat::Single(values) =
                nodestats::attrs(&hg, &bunch, Some("x"), json!(missing)).unwrap()
            else {
                panic!("expected single attribute");
            };

            for id in &bunch {
                let expected = if tagged.contains(id) { json!("set") } else { json!(missing) };
                prop_assert_eq!(&values[id], &expected);
            }
        }

        #[test]
        fn restriction_is_intersection(
            hg in arb_hypergraph(),
            picks in prop::collection::vec(0u32..16, 0..10),
        ) {
            // ids 12..16 never occur as nodes
            let bunch: Vec<NodeId> = picks.into_iter().map(NodeId::from).collect();
            let scores = nodestats::centrality(&hg, &bunch, &Measure::Degree);

            let expected: Vec<&NodeId> = hg.node_ids().filter(|id| bunch.contains(*id)).collect();
            let got: Vec<&NodeId> = scores.keys().collect();
            prop_assert_eq!(got, expected);
        }
    }
}
