//! Path module - the output unit of every search

use crate::edge::Edge;
use serde::Serialize;
use std::fmt;

/// Hop parity of a path
///
/// By convention an even path marks an "ally" of the source and an odd
/// path a "rival". Zero hops is even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// Even number of edges
    Even,
    /// Odd number of edges
    Odd,
}

impl Parity {
    /// Parity of a hop count
    pub fn of(hops: usize) -> Self {
        if hops % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The parity after one more edge
    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// An ordered walk from a source vertex
///
/// `edges.len() == vertices.len() - 1` always holds. A path only grows by
/// [`Path::push`], which keeps the total weight in step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    vertices: Vec<String>,
    edges: Vec<Edge>,
    weight: f64,
}

impl Path {
    /// Start a zero-hop path at `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            vertices: vec![source.into()],
            edges: Vec::new(),
            weight: 0.0,
        }
    }

    /// Append one step
    ///
    /// The edge must lead out of the current target into `vertex`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rivalry_domain::{Edge, Parity, Path};
    ///
    /// let mut path = Path::new("A");
    /// let edge = Edge::new("A", "B", 5.0);
    /// path.push("B", edge.clone());
    ///
    /// assert_eq!(path.vertices(), ["A", "B"]);
    /// assert_eq!(path.weight(), edge.weight());
    /// assert_eq!(path.parity(), Parity::Odd);
    /// ```
    pub fn push(&mut self, vertex: impl Into<String>, edge: Edge) {
        debug_assert_eq!(edge.source(), self.target());
        self.weight += edge.weight();
        self.vertices.push(vertex.into());
        self.edges.push(edge);
    }

    /// Visited vertex names, source first
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Traversed edges, in order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of edge weights
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of vertices
    pub fn steps(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    /// Hop parity
    pub fn parity(&self) -> Parity {
        Parity::of(self.hops())
    }

    /// Whether the hop count is even
    pub fn is_even(&self) -> bool {
        self.parity() == Parity::Even
    }

    /// First vertex
    pub fn source(&self) -> &str {
        &self.vertices[0]
    }

    /// Last vertex
    pub fn target(&self) -> &str {
        &self.vertices[self.vertices.len() - 1]
    }

    /// The vertex before the target, if the path has at least one hop
    pub fn predecessor(&self) -> Option<&str> {
        self.vertices
            .len()
            .checked_sub(2)
            .map(|i| self.vertices[i].as_str())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.join(" -> "))
    }
}
