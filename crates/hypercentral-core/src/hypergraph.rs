//! The hypergraph container.

use crate::{EdgeId, Error, NodeId, Result};
use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{NodeIndex, UnGraph};
use serde_json::Value;
use std::collections::{HashSet, VecDeque};

/// Attribute record: attribute name -> arbitrary JSON value.
pub type Attrs = serde_json::Map<String, Value>;

/// A hypergraph: nodes plus edges, where each edge is a non-empty node set.
///
/// Nodes and edges keep their insertion order. That order is the "entity
/// order" used whenever a statistic is turned into a dense array.
///
/// # Example
///
/// ```rust
/// use hypercentral_core::{Hypergraph, NodeId};
///
/// let hg = Hypergraph::from_edges(vec![vec![1, 2, 3], vec![2, 3, 4, 5], vec![3, 4, 5]])?;
///
/// assert_eq!(hg.num_nodes(), 5);
/// assert_eq!(hg.num_edges(), 3);
/// assert_eq!(hg.degree(&NodeId::from(3)), Some(3));
/// # Ok::<(), hypercentral_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hypergraph {
    /// Node -> edges containing it.
    nodes: IndexMap<NodeId, IndexSet<EdgeId>>,

    /// Edge -> member nodes.
    edges: IndexMap<EdgeId, IndexSet<NodeId>>,

    node_attrs: IndexMap<NodeId, Attrs>,
    edge_attrs: IndexMap<EdgeId, Attrs>,

    /// Hypergraph-level attributes (e.g. `name`).
    attrs: Attrs,

    /// Next candidate for an auto-assigned edge ID.
    next_edge_id: usize,
}

impl Hypergraph {
    /// Create an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hypergraph from member lists, assigning edge IDs `0, 1, 2, ...`.
    pub fn from_edges<I, E, T>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        let mut hg = Self::new();
        for members in edges {
            hg.add_edge(members)?;
        }
        Ok(hg)
    }

    /// Add a node. Existing nodes are left untouched.
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            self.nodes.insert(id.clone(), IndexSet::new());
            self.node_attrs.insert(id, Attrs::new());
        }
    }

    /// Add a node with attributes, merging into any existing record.
    pub fn add_node_with_attrs(&mut self, id: impl Into<NodeId>, attrs: Attrs) {
        let id = id.into();
        self.add_node(id.clone());
        if let Some(record) = self.node_attrs.get_mut(&id) {
            record.extend(attrs);
        }
    }

    /// Add an edge with an auto-assigned ID.
    ///
    /// Duplicate members collapse; members not yet in the hypergraph are added.
    pub fn add_edge<T: Into<NodeId>>(
        &mut self,
        members: impl IntoIterator<Item = T>,
    ) -> Result<EdgeId> {
        while self.edges.contains_key(&EdgeId::from(self.next_edge_id)) {
            self.next_edge_id += 1;
        }
        let id = EdgeId::from(self.next_edge_id);
        self.add_edge_with_id(members, id.clone())?;
        Ok(id)
    }

    /// Add an edge with an explicit ID.
    pub fn add_edge_with_id<T: Into<NodeId>>(
        &mut self,
        members: impl IntoIterator<Item = T>,
        id: impl Into<EdgeId>,
    ) -> Result<()> {
        let id = id.into();
        if self.edges.contains_key(&id) {
            return Err(Error::DuplicateEdge(id.0));
        }

        let members: IndexSet<NodeId> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Err(Error::EmptyEdge);
        }

        for node in &members {
            self.add_node(node.clone());
            if let Some(memberships) = self.nodes.get_mut(node) {
                memberships.insert(id.clone());
            }
        }

        self.edges.insert(id.clone(), members);
        self.edge_attrs.insert(id, Attrs::new());
        Ok(())
    }

    /// Set one attribute on a node.
    pub fn set_node_attr(
        &mut self,
        id: &NodeId,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let record = self
            .node_attrs
            .get_mut(id)
            .ok_or_else(|| Error::NodeNotFound(id.0.clone()))?;
        record.insert(key.into(), value.into());
        Ok(())
    }

    /// Set one attribute on an edge.
    pub fn set_edge_attr(
        &mut self,
        id: &EdgeId,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let record = self
            .edge_attrs
            .get_mut(id)
            .ok_or_else(|| Error::EdgeNotFound(id.0.clone()))?;
        record.insert(key.into(), value.into());
        Ok(())
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Edge IDs in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = &EdgeId> {
        self.edges.keys()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn contains_edge(&self, id: &EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    /// Member nodes of an edge.
    pub fn members(&self, id: &EdgeId) -> Option<&IndexSet<NodeId>> {
        self.edges.get(id)
    }

    /// Edges containing a node.
    pub fn memberships(&self, id: &NodeId) -> Option<&IndexSet<EdgeId>> {
        self.nodes.get(id)
    }

    /// Number of edges containing a node.
    pub fn degree(&self, id: &NodeId) -> Option<usize> {
        self.nodes.get(id).map(IndexSet::len)
    }

    /// Number of members of an edge.
    pub fn edge_size(&self, id: &EdgeId) -> Option<usize> {
        self.edges.get(id).map(IndexSet::len)
    }

    /// Largest edge size (0 for a hypergraph without edges).
    pub fn max_edge_size(&self) -> usize {
        self.edges.values().map(IndexSet::len).max().unwrap_or(0)
    }

    pub fn node_attrs(&self, id: &NodeId) -> Option<&Attrs> {
        self.node_attrs.get(id)
    }

    pub fn edge_attrs(&self, id: &EdgeId) -> Option<&Attrs> {
        self.edge_attrs.get(id)
    }

    /// Hypergraph-level attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// The dual hypergraph: every edge becomes a node and every node an edge.
    ///
    /// Attributes travel with their entity. Isolated nodes would become empty
    /// edges, so they are dropped.
    pub fn dual(&self) -> Hypergraph {
        let mut dual = Hypergraph::new();
        dual.attrs = self.attrs.clone();

        for (edge, attrs) in &self.edge_attrs {
            dual.add_node_with_attrs(NodeId::from(edge.clone()), attrs.clone());
        }

        for (node, memberships) in &self.nodes {
            if memberships.is_empty() {
                continue;
            }
            let id = EdgeId::from(node.clone());
            let members: IndexSet<NodeId> =
                memberships.iter().cloned().map(NodeId::from).collect();
            for member in &members {
                if let Some(m) = dual.nodes.get_mut(member) {
                    m.insert(id.clone());
                }
            }
            dual.edges.insert(id.clone(), members);
            dual.edge_attrs.insert(
                id,
                self.node_attrs.get(node).cloned().unwrap_or_default(),
            );
        }

        dual
    }

    /// Whether every node can reach every other through shared edges.
    ///
    /// An empty hypergraph is not connected.
    pub fn is_connected(&self) -> bool {
        let n = self.num_nodes();
        if n == 0 {
            return false;
        }

        let inc = self.incidence();
        let mut seen_node = vec![false; n];
        let mut seen_edge = vec![false; self.num_edges()];
        let mut queue = VecDeque::from([0]);
        seen_node[0] = true;
        let mut reached = 1;

        while let Some(v) = queue.pop_front() {
            for &e in &inc.node_edges[v] {
                if seen_edge[e] {
                    continue;
                }
                seen_edge[e] = true;
                for &u in &inc.edge_nodes[e] {
                    if !seen_node[u] {
                        seen_node[u] = true;
                        reached += 1;
                        queue.push_back(u);
                    }
                }
            }
        }

        reached == n
    }

    /// Clique expansion: links every pair of distinct nodes sharing an edge.
    ///
    /// Graph node `i` carries weight `i`, the position of the hypergraph node
    /// in insertion order.
    pub fn clique_expansion(&self) -> UnGraph<usize, ()> {
        let n = self.num_nodes();
        let inc = self.incidence();
        let mut graph = UnGraph::with_capacity(n, 0);
        for i in 0..n {
            graph.add_node(i);
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for members in &inc.edge_nodes {
            for (a, &u) in members.iter().enumerate() {
                for &v in &members[a + 1..] {
                    let key = if u < v { (u, v) } else { (v, u) };
                    if seen.insert(key) {
                        graph.add_edge(NodeIndex::new(key.0), NodeIndex::new(key.1), ());
                    }
                }
            }
        }

        graph
    }

    /// Index-based incidence structure in insertion order.
    pub(crate) fn incidence(&self) -> Incidence {
        let node_edges = self
            .nodes
            .values()
            .map(|edges| {
                edges
                    .iter()
                    .filter_map(|e| self.edges.get_index_of(e))
                    .collect()
            })
            .collect();
        let edge_nodes = self
            .edges
            .values()
            .map(|members| {
                members
                    .iter()
                    .filter_map(|v| self.nodes.get_index_of(v))
                    .collect()
            })
            .collect();
        Incidence {
            node_edges,
            edge_nodes,
        }
    }
}

/// Node/edge adjacency by position, the form the algorithms iterate over.
#[derive(Debug, Clone)]
pub(crate) struct Incidence {
    pub node_edges: Vec<Vec<usize>>,
    pub edge_nodes: Vec<Vec<usize>>,
}

impl Incidence {
    pub fn num_nodes(&self) -> usize {
        self.node_edges.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_nodes.len()
    }
}
