//! Graph file error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a valid graph document
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document describes an inconsistent graph
    #[error("invalid graph: {0}")]
    Invalid(#[from] DomainError),
}
