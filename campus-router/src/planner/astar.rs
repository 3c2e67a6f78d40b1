//! Heuristic-guided shortest path.
//!
//! Same contract as [`super::dijkstra::shortest_path`], but the frontier is
//! ordered by `g + h` where `h` is the straight-line distance to the goal
//! (converted to minutes at [`ASSUMED_PACE_M_PER_MIN`] in time mode).
//!
//! The time-mode estimate is only admissible while no edge is faster than the
//! assumed pace. Graphs with shuttle or vehicle legs can break that, and the
//! search may then return a slower route than the optimum. This is a known
//! limitation and is not corrected for.

use std::collections::HashSet;

use chrono::NaiveTime;
use tracing::{debug, trace};

use crate::domain::{Graph, NodeId, Route, WeightMode};

use super::frontier::Frontier;
use super::path::Labels;

/// Walking pace assumed by the time-mode heuristic, in meters per minute.
pub const ASSUMED_PACE_M_PER_MIN: f64 = 80.0;

/// Estimated remaining cost from `from` to `goal`.
///
/// Unknown nodes estimate to zero, which keeps the search correct.
pub fn heuristic(graph: &Graph, from: NodeId, goal: NodeId, mode: WeightMode) -> f64 {
    let meters = graph.straight_line(from, goal).unwrap_or(0.0);
    match mode {
        WeightMode::Distance => meters,
        WeightMode::Time => meters / ASSUMED_PACE_M_PER_MIN,
    }
}

/// Find a route from `start` to `goal` using A*.
///
/// Nodes are closed once popped and never relaxed into again. Returns `None`
/// when `goal` cannot be reached.
pub fn shortest_path(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    mode: WeightMode,
    depart: NaiveTime,
) -> Option<Route> {
    let mut labels = Labels::new(start, depart);
    let mut open = Frontier::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    open.push(start, heuristic(graph, start, goal, mode));

    while let Some(current) = open.pop() {
        if current == goal {
            break;
        }
        closed.insert(current);
        trace!(node = %current, g = labels.cost(current), "expanding");

        for edge in graph.neighbors(current) {
            if closed.contains(&edge.to) {
                continue;
            }
            if let Some(g) = labels.relax(edge, mode) {
                open.push(edge.to, g + heuristic(graph, edge.to, goal, mode));
            }
        }
    }

    debug!(
        %start,
        %goal,
        %mode,
        closed = closed.len(),
        pushed = open.pushed(),
        "a* finished"
    );

    labels.into_route(graph, goal)
}
