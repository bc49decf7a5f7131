//! Rivalry Storage Layer
//!
//! Implements the [`RivalryStore`] trait with an in-memory arena.
//!
//! # Architecture
//!
//! - Vertices live in a `Vec`, addressed by [`VertexId`] slot index
//! - A name index maps each unique name to its slot
//! - Outgoing edges are kept in an adjacency list per slot, so a vertex
//!   never holds its own edges
//! - Snapshots and seed datasets rebuild a graph from names, conferences
//!   and strengths only
//!
//! # Examples
//!
//! ```
//! use rivalry_domain::RivalryStore;
//! use rivalry_store::RivalryGraph;
//!
//! let mut graph = RivalryGraph::new();
//! graph.add_conference("B10", &["Michigan", "Ohio State"]).unwrap();
//! graph.update_edge("Michigan", "Ohio State", 10.0).unwrap();
//! assert!(graph.find_edge("Michigan", "Ohio State").is_some());
//! ```

#![warn(missing_docs)]

mod error;
pub mod seed;
pub mod snapshot;

pub use error::StoreError;
pub use seed::{ConferenceSeed, RatingSeed, SeedDataset};
pub use snapshot::{EdgeRecord, GraphSnapshot};

use rivalry_domain::{normalize_strengths, Edge, GraphView, RivalryStore, Vertex, VertexId};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// An outgoing edge together with the slot of its destination
#[derive(Debug, Clone)]
struct Outgoing {
    dest: VertexId,
    edge: Edge,
}

/// In-memory implementation of RivalryStore
///
/// Mutation takes `&mut self` and searches take `&self`, so the borrow
/// checker gives every search an unchanging view of the graph.
#[derive(Debug, Clone, Default)]
pub struct RivalryGraph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<Outgoing>>,
    edge_count: usize,
}

impl RivalryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph from a data file
    ///
    /// `.toml` files are read as seed datasets. `.json` files are read as
    /// snapshots when they carry a `vertices` table and as seed datasets
    /// otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => SeedDataset::from_toml_str(&contents)?.build(),
            Some("json") => {
                let value: serde_json::Value = serde_json::from_str(&contents)?;
                if value.get("vertices").is_some() {
                    let snapshot: GraphSnapshot = serde_json::from_value(value)?;
                    Self::from_snapshot(&snapshot)
                } else {
                    let seed: SeedDataset = serde_json::from_value(value)?;
                    seed.build()
                }
            }
            _ => Err(StoreError::InvalidInput(format!(
                "Unsupported data file: {}",
                path.display()
            ))),
        }
    }

    /// Insert a vertex with only a name and conference
    pub fn add_vertex_by_name(&mut self, name: &str, conference: &str) -> Result<VertexId, StoreError> {
        self.add_vertex(Vertex::new(name, conference))
    }

    /// Insert a whole conference roster
    ///
    /// All names are checked first; if any is already present or repeated
    /// within `names`, nothing is inserted.
    pub fn add_conference<S: AsRef<str>>(
        &mut self,
        conference: &str,
        names: &[S],
    ) -> Result<Vec<VertexId>, StoreError> {
        let mut seen = std::collections::HashSet::new();
        for name in names {
            let name = name.as_ref();
            if self.index.contains_key(name) || !seen.insert(name) {
                warn!(conference, name, "Rejected conference batch with duplicate vertex");
                return Err(StoreError::DuplicateVertex(name.to_string()));
            }
        }

        names
            .iter()
            .map(|name| self.add_vertex_by_name(name.as_ref(), conference))
            .collect()
    }

    /// Seed the outgoing edges of one vertex from a raw rating table
    ///
    /// Ratings are rescaled with [`normalize_strengths`] and each edge is
    /// created with `add_edge`. Every name is resolved before any edge is
    /// written, so a missing vertex leaves the graph untouched.
    pub fn batch_edges_from_weights<S: AsRef<str>>(
        &mut self,
        source: &str,
        dests: &[S],
        strengths: &[f64],
    ) -> Result<usize, StoreError> {
        if dests.len() != strengths.len() {
            return Err(StoreError::InvalidInput(format!(
                "{} destinations but {} strengths for {}",
                dests.len(),
                strengths.len(),
                source
            )));
        }
        if strengths.iter().any(|s| !s.is_finite()) {
            return Err(StoreError::InvalidInput(format!(
                "Non-finite rating for {}",
                source
            )));
        }

        self.resolve(source)?;
        for dest in dests {
            self.resolve(dest.as_ref())?;
        }

        let normalized = normalize_strengths(strengths);
        for (dest, strength) in dests.iter().zip(normalized) {
            self.add_edge(source, dest.as_ref(), strength)?;
        }

        debug!(source, count = dests.len(), "Seeded edges from rating table");
        Ok(dests.len())
    }

    /// Vertices of one conference, in insertion order
    pub fn find_conference(&self, conference: &str) -> Vec<&Vertex> {
        self.vertices
            .iter()
            .filter(|v| v.conference == conference)
            .collect()
    }

    /// Get an edge or fail with `EdgeNotFound`
    pub fn edge(&self, source: &str, dest: &str) -> Result<&Edge, StoreError> {
        self.find_edge(source, dest).ok_or_else(|| StoreError::EdgeNotFound {
            from: source.to_string(),
            to: dest.to_string(),
        })
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// All edges, grouped by source in vertex insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten().map(|o| &o.edge)
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Resolve a name or fail with `VertexNotFound`
    fn resolve(&self, name: &str) -> Result<VertexId, StoreError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| StoreError::VertexNotFound(name.to_string()))
    }
}

impl GraphView for RivalryGraph {
    fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        (0..self.vertices.len()).map(VertexId::from_index).collect()
    }

    fn outgoing(&self, id: VertexId) -> Vec<(VertexId, &Edge)> {
        self.adjacency
            .get(id.index())
            .map(|list| list.iter().map(|o| (o.dest, &o.edge)).collect())
            .unwrap_or_default()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl RivalryStore for RivalryGraph {
    type Error = StoreError;

    fn add_vertex(&mut self, vertex: Vertex) -> Result<VertexId, Self::Error> {
        if self.index.contains_key(&vertex.name) {
            warn!(name = %vertex.name, "Rejected duplicate vertex");
            return Err(StoreError::DuplicateVertex(vertex.name));
        }

        let id = VertexId::from_index(self.vertices.len());
        debug!(name = %vertex.name, conference = %vertex.conference, %id, "Added vertex");
        self.index.insert(vertex.name.clone(), id);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    fn add_edge(&mut self, source: &str, dest: &str, strength: f64) -> Result<(), Self::Error> {
        let from = self.resolve(source)?;
        let to = self.resolve(dest)?;

        // No uniqueness check here; update_edge is the upsert path
        self.adjacency[from.index()].push(Outgoing {
            dest: to,
            edge: Edge::new(source, dest, strength),
        });
        self.edge_count += 1;
        debug!(source, dest, strength, "Added edge");
        Ok(())
    }

    fn update_edge(&mut self, source: &str, dest: &str, strength: f64) -> Result<(), Self::Error> {
        let from = self.resolve(source)?;
        let to = self.resolve(dest)?;

        let existing = self.adjacency[from.index()]
            .iter_mut()
            .find(|o| o.dest == to);

        match existing {
            Some(outgoing) => {
                outgoing.edge.set_strength(strength);
                debug!(source, dest, strength, "Updated edge");
                Ok(())
            }
            None => self.add_edge(source, dest, strength),
        }
    }

    fn delete_edge(&mut self, source: &str, dest: &str) -> usize {
        let (Some(from), Some(to)) = (self.vertex_id(source), self.vertex_id(dest)) else {
            return 0;
        };

        let list = &mut self.adjacency[from.index()];
        let before = list.len();
        list.retain(|o| o.dest != to);
        let removed = before - list.len();

        self.edge_count -= removed;
        if removed > 0 {
            debug!(source, dest, removed, "Deleted edge");
        }
        removed
    }

    fn find_vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).and_then(|id| self.vertex(id))
    }

    fn find_edge(&self, source: &str, dest: &str) -> Option<&Edge> {
        let from = self.vertex_id(source)?;
        let to = self.vertex_id(dest)?;
        self.adjacency[from.index()]
            .iter()
            .find(|o| o.dest == to)
            .map(|o| &o.edge)
    }
}
