//! The landmark graph.
//!
//! Nodes are kept in id order so every scan over them is deterministic.
//! Each node's outgoing edges keep their insertion order: searches break ties
//! by it and [`Graph::find_edge`] returns the first match.

use std::collections::{BTreeMap, HashMap};

use super::{DomainError, Edge, Node, NodeId};

/// An in-memory directed graph of landmarks and walkways.
///
/// Built once, then shared read-only between queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, replacing any node with the same id.
    ///
    /// Returns the node that was replaced, if any. Existing edges are kept.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        self.adjacency.entry(node.id).or_default();
        self.nodes.insert(node.id, node)
    }

    /// Append an edge to its tail's adjacency list.
    ///
    /// A bidirectional edge also appends an independent mirror edge to the
    /// head's list.
    pub fn add_edge(&mut self, edge: Edge) {
        let mirror = edge.bidirectional.then(|| edge.reversed());
        self.adjacency.entry(edge.from).or_default().push(edge);
        if let Some(back) = mirror {
            self.adjacency.entry(back.from).or_default().push(back);
        }
    }

    /// Add an edge after checking its endpoints and attributes.
    ///
    /// Used when loading graphs from untrusted data; the builders for known
    /// datasets call [`Graph::add_edge`] directly.
    pub fn try_add_edge(&mut self, edge: Edge) -> Result<(), DomainError> {
        for endpoint in [edge.from, edge.to] {
            if !self.contains(endpoint) {
                return Err(DomainError::UnknownEndpoint {
                    from: edge.from,
                    to: edge.to,
                    missing: endpoint,
                });
            }
        }

        let invalid = |reason| DomainError::InvalidEdge {
            from: edge.from,
            to: edge.to,
            reason,
        };
        if !(edge.distance_m.is_finite() && edge.distance_m >= 0.0) {
            return Err(invalid("distance must be a non-negative number"));
        }
        if !(edge.base_minutes.is_finite() && edge.base_minutes >= 0.0) {
            return Err(invalid("duration must be a non-negative number"));
        }
        if !(edge.peak_multiplier.is_finite() && edge.peak_multiplier > 0.0)
            || !(edge.off_peak_multiplier.is_finite() && edge.off_peak_multiplier > 0.0)
        {
            return Err(invalid("traffic multipliers must be positive"));
        }

        self.add_edge(edge);
        Ok(())
    }

    /// Outgoing edges of `id`, in insertion order.
    ///
    /// Unknown ids have no neighbours.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first outgoing edge of `from` that leads to `to`.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.neighbors(from).iter().find(|edge| edge.to == to)
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Whether the graph has a node with this id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed adjacency entries, mirrors included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Straight-line distance between two nodes' coordinates.
    ///
    /// Returns `None` if either node is unknown.
    pub fn straight_line(&self, a: NodeId, b: NodeId) -> Option<f64> {
        Some(self.node(a)?.distance_to(self.node(b)?))
    }

    /// Display name of a node, if known.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }
}
