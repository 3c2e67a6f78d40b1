//! Campus graph data.
//!
//! The built-in University of Ghana campus graph, plus a JSON file format for
//! loading other graphs.

mod campus;
mod error;
mod file;

pub use campus::{CampusGraphBuilder, WALKING_PACE_M_PER_MIN, campus_graph};
pub use error::DatasetError;
pub use file::{EdgeRecord, GraphFile, NodeRecord, from_json_str, load_graph};
