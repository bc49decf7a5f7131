//! Error types for path searches

use thiserror::Error;

/// Errors that can occur during a search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A source or target name has no vertex
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// No path connects the requested vertices
    #[error("No path from {from} to {to}")]
    NoPath {
        /// Search source
        from: String,
        /// Requested target
        to: String,
    },
}
