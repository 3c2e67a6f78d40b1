//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Graph, NodeId, Route, WeightMode};
use crate::planner::DistanceMatrix;

/// Query string for `/api/route`.
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    /// Start node id
    pub start: u32,

    /// Goal node id
    pub goal: u32,

    /// DISTANCE or TIME (defaults to TIME)
    pub mode: Option<String>,

    /// dijkstra, astar or keyword (defaults to astar)
    pub algo: Option<String>,

    /// Departure time in HH:MM format (defaults to now)
    pub time: Option<String>,

    /// Landmark keyword, for algo=keyword
    pub kw: Option<String>,

    /// Number of alternatives, for algo=keyword
    pub k: Option<usize>,
}

/// A route in query results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Node ids from start to goal
    pub seq: Vec<NodeId>,

    /// Landmark names, parallel to `seq`
    pub names: Vec<String>,

    pub distance_m: f64,
    pub minutes: f64,

    /// One-line human readable summary
    pub pretty: String,
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route, graph: &Graph) -> Self {
        let names = route
            .nodes()
            .iter()
            .map(|&id| {
                graph
                    .name_of(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{id}"))
            })
            .collect();

        Self {
            seq: route.nodes().to_vec(),
            names,
            distance_m: route.distance_m(),
            minutes: route.minutes(),
            pretty: route.describe(graph).to_string(),
        }
    }
}

/// Response for `/api/route`.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Departure time used, HH:MM
    pub depart: String,

    pub mode: WeightMode,

    /// Routes, best first; empty when the goal is unreachable
    pub routes: Vec<RouteResult>,
}

/// A landmark in `/api/landmarks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkResult {
    pub id: NodeId,
    pub name: String,
    pub tags: Vec<String>,
}

/// Response for `/api/distances`.
#[derive(Debug, Serialize)]
pub struct DistancesResponse {
    /// Row and column order
    pub ids: Vec<NodeId>,

    /// Shortest distances in kilometres; `null` when unreachable
    pub km: Vec<Vec<Option<f64>>>,
}

impl DistancesResponse {
    /// Create from an all-pairs distance matrix.
    pub fn from_matrix(matrix: &DistanceMatrix) -> Self {
        let km = matrix
            .rows()
            .map(|(_, row)| row.into_iter().map(|m| m.map(|m| m / 1000.0)).collect())
            .collect();

        Self {
            ids: matrix.ids().to_vec(),
            km,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
