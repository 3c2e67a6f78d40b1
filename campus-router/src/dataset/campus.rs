//! The built-in campus dataset.

use crate::domain::{Edge, Graph, Node};

/// Walking pace used to derive base durations, in meters per minute.
pub const WALKING_PACE_M_PER_MIN: f64 = 80.0;

const PEAK_MULTIPLIER: f64 = 1.3;
const OFF_PEAK_MULTIPLIER: f64 = 1.0;

/// Builder for walking graphs.
///
/// Every path is bidirectional, timed at [`WALKING_PACE_M_PER_MIN`] and
/// slowed down during peak hours.
#[derive(Debug, Default)]
pub struct CampusGraphBuilder {
    inner: Graph,
}

impl CampusGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a landmark.
    pub fn landmark(mut self, id: u32, name: &str, x: f64, y: f64, tags: &[&str]) -> Self {
        self.inner.add_node(Node::new(id, name, x, y, tags.iter().copied()));
        self
    }

    /// Add a walking path of `meters` between two landmarks.
    pub fn path(mut self, from: u32, to: u32, meters: f64) -> Self {
        let edge = Edge::new(from, to, meters, meters / WALKING_PACE_M_PER_MIN)
            .bidirectional()
            .with_traffic(PEAK_MULTIPLIER, OFF_PEAK_MULTIPLIER);
        self.inner.add_edge(edge);
        self
    }

    /// Build the graph.
    pub fn build(self) -> Graph {
        self.inner
    }
}

/// The University of Ghana, Legon campus: 20 landmarks and 24 walking paths.
pub fn campus_graph() -> Graph {
    CampusGraphBuilder::new()
        .landmark(1, "Main Gate", 0.0, 0.0, &["gate"])
        .landmark(2, "Balme Library", 2.0, 2.0, &["library", "landmark"])
        .landmark(3, "Night Market", 4.0, 1.0, &["market", "food"])
        .landmark(4, "Commonwealth Hall", 1.0, -1.0, &["hall"])
        .landmark(5, "Legon Hall", 3.0, 0.0, &["hall"])
        .landmark(6, "Akuafo Hall", 4.0, 0.0, &["hall"])
        .landmark(7, "UGTD", 3.0, 3.0, &["computing", "lab"])
        .landmark(8, "Business School", 4.0, 3.0, &["business", "bank"])
        .landmark(9, "Banking Square", 5.0, 3.0, &["bank"])
        .landmark(10, "JQB", 1.0, 1.0, &["lecture", "block"])
        .landmark(11, "Central Cafeteria", 5.0, 1.0, &["food", "cafeteria"])
        .landmark(12, "Law School", 6.0, 2.0, &["law", "faculty"])
        .landmark(13, "UG Hospital", 7.0, 2.0, &["hospital", "clinic"])
        .landmark(14, "Gym", 7.0, 0.0, &["gym", "sports"])
        .landmark(15, "Stadium", 7.0, 1.0, &["stadium", "sports"])
        .landmark(16, "N (Engineering)", 5.0, 4.0, &["engineering", "block"])
        .landmark(17, "Volta Hall", 3.0, 1.0, &["hall"])
        .landmark(18, "University Basic School", 2.0, -1.0, &["school"])
        .landmark(19, "Noguchi", 8.0, 3.0, &["research", "lab"])
        .landmark(20, "UPSA Road Junction", -1.0, 0.0, &["junction"])
        .path(1, 10, 1000.0)
        .path(1, 4, 1200.0)
        .path(1, 20, 500.0)
        .path(10, 2, 400.0)
        .path(2, 7, 600.0)
        .path(7, 8, 700.0)
        .path(8, 9, 400.0)
        .path(8, 5, 500.0)
        .path(5, 6, 300.0)
        .path(6, 3, 200.0)
        .path(3, 11, 300.0)
        .path(11, 12, 800.0)
        .path(12, 13, 900.0)
        .path(13, 15, 1200.0)
        .path(15, 14, 300.0)
        .path(7, 16, 800.0)
        .path(16, 12, 700.0)
        .path(5, 17, 400.0)
        .path(17, 2, 500.0)
        .path(2, 12, 900.0)
        .path(4, 10, 800.0)
        .path(4, 18, 700.0)
        .path(9, 12, 600.0)
        .path(12, 19, 1100.0)
        .build()
}
