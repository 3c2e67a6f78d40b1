//! Landmark identifiers and nodes.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a landmark in the graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A planar coordinate. Only the A* heuristic looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A landmark: identifier, display name, position and free-form tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: Point,
    pub tags: BTreeSet<String>,
}

impl Node {
    /// Create a node.
    pub fn new<I, S>(id: impl Into<NodeId>, name: impl Into<String>, x: f64, y: f64, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            position: Point::new(x, y),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Straight-line distance between this node and another.
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.position.distance_to(&other.position)
    }

    /// Whether the display name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Whether any tag contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    pub fn tag_contains(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        let a = Node::new(1, "A", 0.0, 0.0, ["x"]);
        let b = Node::new(2, "B", 3.0, 4.0, Vec::<String>::new());
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn name_and_tag_matching_ignores_case() {
        let node = Node::new(9, "Banking Square", 5.0, 3.0, ["Bank", "Finance"]);

        assert!(node.name_contains("banking"));
        assert!(node.name_contains("square"));
        assert!(!node.name_contains("library"));

        assert!(node.tag_contains("bank"));
        assert!(node.tag_contains("fin"));
        assert!(!node.tag_contains("food"));
    }

    #[test]
    fn tags_are_a_set() {
        let node = Node::new(1, "Gate", 0.0, 0.0, ["gate", "gate", "entry"]);
        assert_eq!(node.tags.len(), 2);
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId(12).to_string(), "12");
        assert_eq!(format!("{:?}", NodeId(12)), "NodeId(12)");
    }
}
