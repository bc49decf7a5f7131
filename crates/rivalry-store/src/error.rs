//! Error types for graph store operations

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No vertex has the given name
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// A vertex with the given name already exists
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    /// No edge connects the given pair
    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound {
        /// Source vertex name
        from: String,
        /// Destination vertex name
        to: String,
    },

    /// Malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error while reading or writing a data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
