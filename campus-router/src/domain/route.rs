//! Routes and weighting modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DomainError, Graph, NodeId};

/// What a query minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightMode {
    /// Static edge length in meters.
    Distance,
    /// Traffic-adjusted walking time in minutes.
    Time,
}

/// Error returned when parsing an unknown weight mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weight mode {0:?}: expected DISTANCE or TIME")]
pub struct InvalidWeightMode(String);

impl FromStr for WeightMode {
    type Err = InvalidWeightMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DISTANCE" => Ok(Self::Distance),
            "TIME" => Ok(Self::Time),
            _ => Err(InvalidWeightMode(s.to_string())),
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance => f.write_str("DISTANCE"),
            Self::Time => f.write_str("TIME"),
        }
    }
}

/// A walk through the graph with its totals.
///
/// Consecutive nodes are joined by an edge. Totals are computed by replaying
/// the walk from the departure time, so they already include traffic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    nodes: Vec<NodeId>,
    distance_m: f64,
    minutes: f64,
}

impl Route {
    /// Create a route from its node sequence and totals.
    ///
    /// Returns an error if the sequence is empty.
    pub fn new(nodes: Vec<NodeId>, distance_m: f64, minutes: f64) -> Result<Self, DomainError> {
        if nodes.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        Ok(Self {
            nodes,
            distance_m,
            minutes,
        })
    }

    /// Construct from a walk the planner already knows is non-empty.
    pub(crate) fn from_walk(nodes: Vec<NodeId>, distance_m: f64, minutes: f64) -> Self {
        debug_assert!(!nodes.is_empty(), "planner produced an empty walk");
        Self {
            nodes,
            distance_m,
            minutes,
        }
    }

    /// The node sequence, start first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// First node of the walk.
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the walk.
    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Total length in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Total traffic-adjusted time in minutes.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// The total that `mode` ranks by.
    pub fn cost(&self, mode: WeightMode) -> f64 {
        match mode {
            WeightMode::Distance => self.distance_m,
            WeightMode::Time => self.minutes,
        }
    }

    /// Whether the walk visits `id`.
    #[cfg(test)]
    pub(crate) fn visits(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Human-readable rendering that resolves ids to names.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_router::domain::{Graph, Node, NodeId, Route};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_node(Node::new(1, "Main Gate", 0.0, 0.0, ["gate"]));
    /// graph.add_node(Node::new(2, "Library", 1.0, 1.0, ["library"]));
    ///
    /// let route = Route::new(vec![NodeId(1), NodeId(2)], 1250.0, 15.625).unwrap();
    /// assert_eq!(
    ///     route.describe(&graph).to_string(),
    ///     "Main Gate -> Library | distance: 1.25 km, time: 15.6 min"
    /// );
    /// ```
    pub fn describe<'a>(&'a self, graph: &'a Graph) -> RouteDescription<'a> {
        RouteDescription { route: self, graph }
    }
}

/// Display adapter returned by [`Route::describe`].
pub struct RouteDescription<'a> {
    route: &'a Route,
    graph: &'a Graph,
}

impl fmt::Display for RouteDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.route.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            match self.graph.name_of(*id) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "#{id}")?,
            }
        }
        write!(
            f,
            " | distance: {:.2} km, time: {:.1} min",
            self.route.distance_m / 1000.0,
            self.route.minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Node;

    #[test]
    fn empty_route_rejected() {
        assert_eq!(Route::new(vec![], 0.0, 0.0), Err(DomainError::EmptyRoute));
    }

    #[test]
    fn accessors() {
        let route = Route::new(vec![NodeId(1), NodeId(2), NodeId(3)], 200.0, 5.2).unwrap();

        assert_eq!(route.start(), Some(NodeId(1)));
        assert_eq!(route.goal(), Some(NodeId(3)));
        assert_eq!(route.cost(WeightMode::Distance), 200.0);
        assert_eq!(route.cost(WeightMode::Time), 5.2);
        assert!(route.visits(NodeId(2)));
        assert!(!route.visits(NodeId(4)));
    }

    #[test]
    fn parse_weight_mode() {
        assert_eq!("distance".parse::<WeightMode>(), Ok(WeightMode::Distance));
        assert_eq!("TIME".parse::<WeightMode>(), Ok(WeightMode::Time));
        assert_eq!(" Time ".parse::<WeightMode>(), Ok(WeightMode::Time));
        assert!("fastest".parse::<WeightMode>().is_err());
        assert_eq!(WeightMode::Distance.to_string(), "DISTANCE");
    }

    #[test]
    fn describe_single_node() {
        let mut graph = Graph::new();
        graph.add_node(Node::new(7, "UGTD", 3.0, 3.0, ["lab"]));

        let route = Route::new(vec![NodeId(7)], 0.0, 0.0).unwrap();
        assert_eq!(
            route.describe(&graph).to_string(),
            "UGTD | distance: 0.00 km, time: 0.0 min"
        );
    }

    #[test]
    fn describe_unknown_node_falls_back_to_id() {
        let graph = Graph::new();
        let route = Route::new(vec![NodeId(3), NodeId(4)], 2500.0, 31.3).unwrap();
        assert_eq!(
            route.describe(&graph).to_string(),
            "#3 -> #4 | distance: 2.50 km, time: 31.3 min"
        );
    }
}
