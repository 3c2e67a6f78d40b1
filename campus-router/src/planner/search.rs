//! Route planning entry point.
//!
//! [`Planner`] validates a query against the graph and dispatches it to one of
//! the solvers. The solvers themselves assume valid node ids.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use tracing::debug;

use crate::domain::{Graph, NodeId, Route, WeightMode};

use super::config::SearchConfig;
use super::{astar, dijkstra, landmark};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Start or goal is not a node of the graph
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}

/// Which shortest-path solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Dijkstra,
    #[default]
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

/// Error parsing an [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}: expected dijkstra or astar")]
pub struct InvalidAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(InvalidAlgorithm(s.to_string())),
        }
    }
}

/// Route planner over a campus graph.
pub struct Planner<'a> {
    graph: &'a Graph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Check that both endpoints exist.
    pub fn validate(&self, start: NodeId, goal: NodeId) -> Result<(), QueryError> {
        for id in [start, goal] {
            if !self.graph.contains(id) {
                return Err(QueryError::UnknownNode(id));
            }
        }
        Ok(())
    }

    /// Best route from `start` to `goal`, or `Ok(None)` if unreachable.
    pub fn shortest_path(
        &self,
        algorithm: Algorithm,
        start: NodeId,
        goal: NodeId,
        mode: WeightMode,
        depart: NaiveTime,
    ) -> Result<Option<Route>, QueryError> {
        self.validate(start, goal)?;
        debug!(%algorithm, %start, %goal, %mode, "planning route");

        let route = match algorithm {
            Algorithm::Dijkstra => dijkstra::shortest_path(self.graph, start, goal, mode, depart),
            Algorithm::AStar => astar::shortest_path(self.graph, start, goal, mode, depart),
        };
        Ok(route)
    }

    /// Up to `k` routes through landmarks matching `keyword`.
    ///
    /// `None` uses the configured default count. Counts above the configured
    /// maximum are clamped.
    pub fn routes_by_keyword(
        &self,
        start: NodeId,
        goal: NodeId,
        keyword: &str,
        k: Option<usize>,
        mode: WeightMode,
        depart: NaiveTime,
    ) -> Result<Vec<Route>, QueryError> {
        self.validate(start, goal)?;
        let k = self.config.alternatives_for(k);
        debug!(%start, %goal, keyword, k, %mode, "planning landmark routes");

        Ok(landmark::routes_by_keyword(
            self.graph, start, goal, keyword, k, mode, depart,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_parse() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!(" AStar ".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("a*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("bfs".parse::<Algorithm>().is_err());
    }

    #[test]
    fn algorithm_display_round_trip() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(Algorithm::default(), Algorithm::AStar);
    }

    #[test]
    fn error_display() {
        assert_eq!(QueryError::UnknownNode(NodeId(42)).to_string(), "unknown node 42");
        assert_eq!(
            InvalidAlgorithm("bfs".into()).to_string(),
            "unknown algorithm \"bfs\": expected dijkstra or astar"
        );
    }
}
