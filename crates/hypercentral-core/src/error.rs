//! Error types for hypercentral-core.

use thiserror::Error;

/// Error type for hypergraph operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Measure name not recognised.
    #[error("Invalid measure: {0}")]
    InvalidMeasure(String),

    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    /// An edge must contain at least one node.
    #[error("Edges must contain at least one node")]
    EmptyEdge,

    /// Edge ID already in use.
    #[error("Duplicate edge ID: {0}")]
    DuplicateEdge(String),

    /// Malformed dataset.
    #[error("Invalid hypergraph format: {0}")]
    InvalidFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for hypergraph operations.
pub type Result<T> = std::result::Result<T, Error>;
