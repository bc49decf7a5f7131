//! Graph snapshots
//!
//! A snapshot holds only the primitives a graph is built from: vertices
//! and (source, dest, strength) records. Weights are recomputed on restore.

use crate::{RivalryGraph, StoreError};
use rivalry_domain::{Edge, GraphView, RivalryStore, Vertex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One edge as stored in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source vertex name
    pub source: String,
    /// Destination vertex name
    pub dest: String,
    /// Rivalry strength
    pub strength: f64,
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source().to_string(),
            dest: edge.dest().to_string(),
            strength: edge.strength(),
        }
    }
}

/// Serializable copy of a whole graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Vertices in insertion order
    pub vertices: Vec<Vertex>,
    /// Edges grouped by source
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl RivalryGraph {
    /// Capture the current vertex and edge set
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices().cloned().collect(),
            edges: self.edges().map(EdgeRecord::from).collect(),
        }
    }

    /// Rebuild a graph from a snapshot
    ///
    /// Records are restored one edge each, so parallel edges survive a
    /// save and reload.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, StoreError> {
        let mut graph = Self::new();
        for vertex in &snapshot.vertices {
            graph.add_vertex(vertex.clone())?;
        }
        for record in &snapshot.edges {
            graph.add_edge(&record.source, &record.dest, record.strength)?;
        }

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Restored graph from snapshot"
        );
        Ok(graph)
    }
}
