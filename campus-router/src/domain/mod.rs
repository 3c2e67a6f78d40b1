//! Domain types for the campus router.
//!
//! This module contains the graph model (landmarks, walkways, traffic
//! multipliers) and the route value produced by every query. The graph is
//! assembled once and then only read; nothing in the search core mutates it.

mod edge;
mod error;
mod graph;
mod node;
mod route;
mod time;

pub use edge::{Edge, traffic_multiplier};
pub use error::DomainError;
pub use graph::Graph;
pub use node::{Node, NodeId, Point};
pub use route::{InvalidWeightMode, Route, RouteDescription, WeightMode};
pub use time::{TimeError, advance_clock, is_peak_hour, parse_hhmm};
pub(crate) use time::format_hhmm;
