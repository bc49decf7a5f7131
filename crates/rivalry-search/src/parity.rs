//! Parity-constrained single-source shortest paths
//!
//! Runs Dijkstra over a two-layer graph. Every vertex has an even copy and
//! an odd copy, and every edge leads from one layer into the other. The
//! source starts in the even layer with zero hops. The lightest path to
//! `(v, Even)` is then the lightest even-hop walk to `v`, and likewise for
//! the odd layer.

use crate::error::SearchError;
use crate::frontier::explore;
use crate::shortest::PathMap;
use rivalry_domain::{GraphView, Parity, Path};
use serde::Serialize;
use tracing::debug;

/// Lightest paths from one source, split by hop parity
///
/// A vertex may appear in both maps with different weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParityPaths {
    /// Lightest even-hop path per reachable vertex
    pub even: PathMap,
    /// Lightest odd-hop path per reachable vertex
    pub odd: PathMap,
}

impl ParityPaths {
    /// The lighter of the even and odd path to `target`
    ///
    /// The even path wins an exact tie.
    pub fn lightest(&self, target: &str) -> Option<&Path> {
        match (self.even.get(target), self.odd.get(target)) {
            (Some(even), Some(odd)) if odd.weight() < even.weight() => Some(odd),
            (Some(even), _) => Some(even),
            (None, odd) => odd,
        }
    }
}

/// Compute the lightest even-hop and odd-hop path from `source` to every
/// vertex reachable with that parity.
///
/// # Errors
///
/// `SearchError::VertexNotFound` if `source` names no vertex.
pub fn parity_paths<G: GraphView>(graph: &G, source: &str) -> Result<ParityPaths, SearchError> {
    let start = graph
        .vertex_id(source)
        .ok_or_else(|| SearchError::VertexNotFound(source.to_string()))?;

    let exploration = explore((start, Parity::Even), |(v, parity)| {
        graph
            .outgoing(v)
            .into_iter()
            .map(|(dest, edge)| ((dest, parity.flip()), edge))
            .collect()
    });

    let mut result = ParityPaths::default();
    for &(id, parity) in exploration.settled() {
        let (Some(vertex), Some(path)) = (graph.vertex(id), exploration.path_to((id, parity), source))
        else {
            continue;
        };
        match parity {
            Parity::Even => result.even.insert(vertex.name.clone(), path),
            Parity::Odd => result.odd.insert(vertex.name.clone(), path),
        };
    }

    debug!(
        source,
        even = result.even.len(),
        odd = result.odd.len(),
        "Computed parity paths"
    );
    Ok(result)
}
