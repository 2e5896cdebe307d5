//! XGI JSON hypergraph format.
//!
//! ```json
//! {
//!   "hypergraph-data": {"name": "email-enron"},
//!   "node-data": {"1": {"color": "red"}, "2": {}},
//!   "edge-data": {"0": {"timestamp": 12}},
//!   "edge-dict": {"0": ["1", "2"]}
//! }
//! ```
//!
//! Every section is optional. Node IDs in `edge-dict` may be strings or
//! numbers; both map to the same [`NodeId`]. Key order in the file is kept
//! as entity order.
//!
//! Reference: <https://xgi.readthedocs.io/en/stable/api/readwrite/xgi.readwrite.json.html>

use crate::{Attrs, EdgeId, Error, Hypergraph, NodeId, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

const HYPERGRAPH_DATA: &str = "hypergraph-data";
const NODE_DATA: &str = "node-data";
const EDGE_DATA: &str = "edge-data";
const EDGE_DICT: &str = "edge-dict";

/// XGI JSON format handler.
pub struct XgiJson;

impl XgiJson {
    /// Parse a hypergraph from a reader.
    pub fn read<R: Read>(reader: R) -> Result<Hypergraph> {
        let doc: Value = serde_json::from_reader(reader)?;
        Self::from_value(&doc)
    }

    /// Write a hypergraph to a writer.
    pub fn write<W: Write>(hg: &Hypergraph, writer: W) -> Result<()> {
        serde_json::to_writer(writer, &Self::to_value(hg))?;
        Ok(())
    }

    /// Convert to a JSON value.
    pub fn to_value(hg: &Hypergraph) -> Value {
        let node_data: Map<String, Value> = hg
            .node_ids()
            .map(|id| {
                let record = hg.node_attrs(id).cloned().unwrap_or_default();
                (id.0.clone(), Value::Object(record))
            })
            .collect();

        let edge_data: Map<String, Value> = hg
            .edge_ids()
            .map(|id| {
                let record = hg.edge_attrs(id).cloned().unwrap_or_default();
                (id.0.clone(), Value::Object(record))
            })
            .collect();

        let edge_dict: Map<String, Value> = hg
            .edge_ids()
            .map(|id| {
                let members = hg
                    .members(id)
                    .into_iter()
                    .flatten()
                    .map(|n| Value::String(n.0.clone()))
                    .collect();
                (id.0.clone(), Value::Array(members))
            })
            .collect();

        let mut doc = Map::new();
        doc.insert(HYPERGRAPH_DATA.into(), Value::Object(hg.attrs().clone()));
        doc.insert(NODE_DATA.into(), Value::Object(node_data));
        doc.insert(EDGE_DATA.into(), Value::Object(edge_data));
        doc.insert(EDGE_DICT.into(), Value::Object(edge_dict));
        Value::Object(doc)
    }

    /// Build a hypergraph from a parsed document.
    pub fn from_value(doc: &Value) -> Result<Hypergraph> {
        let doc = doc
            .as_object()
            .ok_or_else(|| Error::InvalidFormat("document must be a JSON object".into()))?;
        let mut hg = Hypergraph::new();

        if let Some(data) = section(doc, HYPERGRAPH_DATA)? {
            *hg.attrs_mut() = data.clone();
        }

        if let Some(nodes) = section(doc, NODE_DATA)? {
            for (id, record) in nodes {
                hg.add_node_with_attrs(id.as_str(), record_of(record, "node", id)?);
            }
        }

        if let Some(edges) = section(doc, EDGE_DICT)? {
            for (id, members) in edges {
                let members = members.as_array().ok_or_else(|| {
                    Error::InvalidFormat(format!("edge {id}: members must be an array"))
                })?;
                let members = members
                    .iter()
                    .map(|m| member_id(m, id))
                    .collect::<Result<Vec<_>>>()?;
                hg.add_edge_with_id(members, id.as_str())?;
            }
        }

        if let Some(records) = section(doc, EDGE_DATA)? {
            for (id, record) in records {
                let edge = EdgeId::from(id);
                if !hg.contains_edge(&edge) {
                    return Err(Error::EdgeNotFound(id.clone()));
                }
                for (key, value) in record_of(record, "edge", id)? {
                    hg.set_edge_attr(&edge, key, value)?;
                }
            }
        }

        debug!(
            nodes = hg.num_nodes(),
            edges = hg.num_edges(),
            "parsed XGI JSON hypergraph"
        );
        Ok(hg)
    }

    /// Serialize to a string.
    pub fn to_string(hg: &Hypergraph) -> Result<String> {
        Ok(serde_json::to_string(&Self::to_value(hg))?)
    }
}

/// Load `<dir>/<name>.json`.
pub fn load_dataset(name: &str, dir: impl AsRef<Path>) -> Result<Hypergraph> {
    let path = dir.as_ref().join(format!("{name}.json"));
    debug!(path = %path.display(), "loading dataset");
    let file = File::open(&path)?;
    XgiJson::read(BufReader::new(file))
}

fn section<'a>(doc: &'a Map<String, Value>, key: &str) -> Result<Option<&'a Map<String, Value>>> {
    match doc.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(Error::InvalidFormat(format!("\"{key}\" must be an object"))),
    }
}

fn record_of(value: &Value, kind: &str, id: &str) -> Result<Attrs> {
    match value {
        Value::Null => Ok(Attrs::new()),
        Value::Object(map) => Ok(map.clone()),
        _ => Err(Error::InvalidFormat(format!(
            "{kind} {id}: attributes must be an object"
        ))),
    }
}

fn member_id(value: &Value, edge: &str) -> Result<NodeId> {
    match value {
        Value::String(s) => Ok(NodeId::from(s.as_str())),
        Value::Number(n) => Ok(NodeId::from(n.to_string())),
        other => Err(Error::InvalidFormat(format!(
            "edge {edge}: invalid member {other}"
        ))),
    }
}
