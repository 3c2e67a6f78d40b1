//! Domain error types.
//!
//! These errors represent validation failures when a graph is assembled from
//! untrusted data. They are distinct from I/O and request errors.

use super::NodeId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// An edge refers to a node that was never added
    #[error("edge {from} -> {to} references unknown node {missing}")]
    UnknownEndpoint {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// Edge attributes are out of range
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: &'static str,
    },

    /// The same node id was supplied twice
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    /// A route must visit at least one node
    #[error("route must contain at least one node")]
    EmptyRoute,
}
