//! JSON graph files.
//!
//! ```json
//! {
//!   "nodes": [{ "id": 1, "name": "Main Gate", "x": 0, "y": 0, "tags": ["gate"] }],
//!   "edges": [{ "from": 1, "to": 2, "distance_m": 400, "base_minutes": 5 }]
//! }
//! ```
//!
//! Edges are bidirectional with peak/off-peak multipliers of 1.3/1.0 unless
//! stated otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DomainError, Edge, Graph, Node, NodeId};

use super::error::DatasetError;

/// A landmark as stored in a graph file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A walkway as stored in a graph file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub distance_m: f64,
    pub base_minutes: f64,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
    #[serde(default = "default_peak")]
    pub peak: f64,
    #[serde(default = "default_off_peak")]
    pub off_peak: f64,
}

fn default_bidirectional() -> bool {
    true
}

fn default_peak() -> f64 {
    1.3
}

fn default_off_peak() -> f64 {
    1.0
}

/// A whole graph document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphFile {
    /// Snapshot an existing graph. Mirror edges are written as one-way records.
    #[cfg(test)]
    pub(crate) fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id,
                name: node.name.clone(),
                x: node.position.x,
                y: node.position.y,
                tags: node.tags.iter().cloned().collect(),
            })
            .collect();
        let edges = graph
            .nodes()
            .flat_map(|node| graph.neighbors(node.id))
            .map(|edge| EdgeRecord {
                from: edge.from,
                to: edge.to,
                distance_m: edge.distance_m,
                base_minutes: edge.base_minutes,
                bidirectional: false,
                peak: edge.peak_multiplier,
                off_peak: edge.off_peak_multiplier,
            })
            .collect();

        Self { nodes, edges }
    }

    /// Validate the records and build a graph.
    pub fn into_graph(self) -> Result<Graph, DomainError> {
        let mut graph = Graph::new();

        for record in self.nodes {
            let id = record.id;
            let node = Node::new(id, record.name, record.x, record.y, record.tags);
            if graph.add_node(node).is_some() {
                return Err(DomainError::DuplicateNode(id));
            }
        }

        for record in self.edges {
            let mut edge = Edge::new(record.from, record.to, record.distance_m, record.base_minutes)
                .with_traffic(record.peak, record.off_peak);
            if record.bidirectional {
                edge = edge.bidirectional();
            }
            graph.try_add_edge(edge)?;
        }

        Ok(graph)
    }
}

/// Parse and validate a graph document.
pub fn from_json_str(json: &str) -> Result<Graph, DatasetError> {
    let file: GraphFile = serde_json::from_str(json)?;
    Ok(file.into_graph()?)
}

/// Load a graph from a JSON file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, DatasetError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = from_json_str(&contents)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph file"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::campus_graph;
    use tempfile::tempdir;

    const SMALL: &str = r#"{
        "nodes": [
            { "id": 1, "name": "Gate", "x": 0, "y": 0, "tags": ["gate"] },
            { "id": 2, "name": "Library", "x": 3, "y": 4 }
        ],
        "edges": [
            { "from": 1, "to": 2, "distance_m": 500, "base_minutes": 6.25 }
        ]
    }"#;

    #[test]
    fn parse_with_defaults() {
        let graph = from_json_str(SMALL).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        let edge = graph.find_edge(NodeId(2), NodeId(1)).unwrap();
        assert_eq!(edge.distance_m, 500.0);
        assert_eq!(edge.peak_multiplier, 1.3);
        assert_eq!(edge.off_peak_multiplier, 1.0);
        assert!(graph.node(NodeId(2)).unwrap().tags.is_empty());
    }

    #[test]
    fn one_way_edges() {
        let json = r#"{
            "nodes": [
                { "id": 1, "name": "A", "x": 0, "y": 0 },
                { "id": 2, "name": "B", "x": 1, "y": 0 }
            ],
            "edges": [
                { "from": 1, "to": 2, "distance_m": 10, "base_minutes": 1,
                  "bidirectional": false, "peak": 2.0, "off_peak": 0.5 }
            ]
        }"#;
        let graph = from_json_str(json).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.find_edge(NodeId(2), NodeId(1)).is_none());
        assert_eq!(graph.find_edge(NodeId(1), NodeId(2)).unwrap().peak_multiplier, 2.0);
    }

    #[test]
    fn rejects_unknown_endpoint() {
        let json = r#"{
            "nodes": [{ "id": 1, "name": "A", "x": 0, "y": 0 }],
            "edges": [{ "from": 1, "to": 7, "distance_m": 10, "base_minutes": 1 }]
        }"#;

        let err = from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Invalid(DomainError::UnknownEndpoint { missing: NodeId(7), .. })
        ));
    }

    #[test]
    fn rejects_duplicate_node() {
        let json = r#"{
            "nodes": [
                { "id": 3, "name": "A", "x": 0, "y": 0 },
                { "id": 3, "name": "B", "x": 1, "y": 1 }
            ]
        }"#;

        let err = from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(DomainError::DuplicateNode(NodeId(3)))));
    }

    #[test]
    fn rejects_negative_distance() {
        let json = r#"{
            "nodes": [
                { "id": 1, "name": "A", "x": 0, "y": 0 },
                { "id": 2, "name": "B", "x": 1, "y": 0 }
            ],
            "edges": [{ "from": 1, "to": 2, "distance_m": -5, "base_minutes": 1 }]
        }"#;

        assert!(matches!(
            from_json_str(json).unwrap_err(),
            DatasetError::Invalid(DomainError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            from_json_str("{ \"nodes\": [").unwrap_err(),
            DatasetError::Json(_)
        ));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(&path, SMALL).unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.name_of(NodeId(2)), Some("Library"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn campus_snapshot_reloads() {
        let campus = campus_graph();
        let json = serde_json::to_string(&GraphFile::from_graph(&campus)).unwrap();
        let reloaded = from_json_str(&json).unwrap();

        assert_eq!(reloaded.node_count(), campus.node_count());
        assert_eq!(reloaded.edge_count(), campus.edge_count());
        let shape = |graph: &Graph, id| -> Vec<(NodeId, f64, f64)> {
            graph
                .neighbors(id)
                .iter()
                .map(|e| (e.to, e.distance_m, e.base_minutes))
                .collect()
        };
        for id in campus.node_ids() {
            assert_eq!(shape(&reloaded, id), shape(&campus, id));
        }
    }
}
