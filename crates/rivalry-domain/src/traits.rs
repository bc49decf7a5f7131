//! Trait definitions for graph access
//!
//! These traits define the boundary between the algorithms and the storage
//! that backs them. Implementations live in other crates.

use crate::{Edge, Vertex, VertexId};

/// Read-only view over a directed rivalry graph
///
/// Searches are generic over this trait and take it by shared reference, so
/// a search always sees one consistent state of the graph.
pub trait GraphView {
    /// Resolve a vertex name to its id
    fn vertex_id(&self, name: &str) -> Option<VertexId>;

    /// Get a vertex by id
    fn vertex(&self, id: VertexId) -> Option<&Vertex>;

    /// All vertex ids, in insertion order
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// Outgoing edges of a vertex with the id of each destination
    fn outgoing(&self, id: VertexId) -> Vec<(VertexId, &Edge)>;

    /// Number of vertices
    fn vertex_count(&self) -> usize {
        self.vertex_ids().len()
    }
}

/// Trait for mutating a rivalry graph
///
/// Implemented by the infrastructure layer (rivalry-store)
pub trait RivalryStore: GraphView {
    /// Error type for store operations
    type Error;

    /// Insert a new vertex; fails if the name is taken
    fn add_vertex(&mut self, vertex: Vertex) -> Result<VertexId, Self::Error>;

    /// Create an edge without checking for an existing one
    fn add_edge(&mut self, source: &str, dest: &str, strength: f64) -> Result<(), Self::Error>;

    /// Upsert an edge: change its strength if present, create it otherwise
    fn update_edge(&mut self, source: &str, dest: &str, strength: f64) -> Result<(), Self::Error>;

    /// Remove every (source, dest) edge, returning how many were removed
    fn delete_edge(&mut self, source: &str, dest: &str) -> usize;

    /// Look up a vertex by name
    fn find_vertex(&self, name: &str) -> Option<&Vertex>;

    /// Look up an edge by its endpoints
    fn find_edge(&self, source: &str, dest: &str) -> Option<&Edge>;
}
