//! Unconstrained single-source shortest paths

use crate::error::SearchError;
use crate::frontier::explore;
use rivalry_domain::{GraphView, Path};
use std::collections::BTreeMap;
use tracing::debug;

/// Shortest paths keyed by target name
pub type PathMap = BTreeMap<String, Path>;

/// Compute the minimum-weight path from `source` to every reachable vertex.
///
/// The source maps to its zero-hop path. Unreachable vertices are absent.
///
/// # Errors
///
/// `SearchError::VertexNotFound` if `source` names no vertex.
pub fn shortest_paths<G: GraphView>(graph: &G, source: &str) -> Result<PathMap, SearchError> {
    let start = graph
        .vertex_id(source)
        .ok_or_else(|| SearchError::VertexNotFound(source.to_string()))?;

    let exploration = explore(start, |v| graph.outgoing(v));

    let mut paths = PathMap::new();
    for &id in exploration.settled() {
        let Some(vertex) = graph.vertex(id) else {
            continue;
        };
        if let Some(path) = exploration.path_to(id, source) {
            paths.insert(vertex.name.clone(), path);
        }
    }

    debug!(source, reached = paths.len(), "Computed shortest paths");
    Ok(paths)
}
