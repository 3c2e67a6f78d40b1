//! Route search over a campus graph.
//!
//! Two single-route solvers share one label store and frontier: plain
//! Dijkstra and A* with a straight-line heuristic. Both price edges in either
//! meters or time-of-day dependent minutes. On top of them sit the
//! landmark-constrained alternatives search and an all-pairs distance table.

mod all_pairs;
mod astar;
mod config;
mod dijkstra;
mod frontier;
mod landmark;
mod path;
mod rank;
mod search;


pub use all_pairs::{DistanceMatrix, all_pairs_distances};
pub use astar::{ASSUMED_PACE_M_PER_MIN, heuristic};
pub use config::SearchConfig;
pub use landmark::{
    candidate_midpoints, matches_keyword, normalize_keyword, route_via, routes_by_keyword,
};
pub use path::{Totals, replay};
pub use rank::{rank_routes, stable_sort_by};
pub use search::{Algorithm, InvalidAlgorithm, Planner, QueryError};

/// Dijkstra shortest path. See [`Planner::shortest_path`] for the validated entry point.
pub use dijkstra::shortest_path as dijkstra_shortest_path;
/// A* shortest path. See [`Planner::shortest_path`] for the validated entry point.
pub use astar::shortest_path as astar_shortest_path;
