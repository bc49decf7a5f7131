//! Vertex module - a team in the rivalry web

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Slot index of a vertex inside a graph store
///
/// Vertices are never removed, so an id stays valid for the lifetime of the
/// store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    /// Create an id from a raw slot index
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw slot index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A team in the rivalry web
///
/// The name is the identity and must be unique within a store. Outgoing
/// rivalries are indexed by the store, not by the vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique name
    pub name: String,

    /// Conference label (e.g. "SEC")
    pub conference: String,

    /// Canonical display name
    pub display_name: String,

    /// Alternate spellings, kept for lookup layers
    #[serde(default)]
    pub alternate_names: BTreeSet<String>,
}

impl Vertex {
    /// Create a vertex whose display name is its name
    ///
    /// # Examples
    ///
    /// ```
    /// use rivalry_domain::Vertex;
    ///
    /// let v = Vertex::new("Michigan", "B10");
    /// assert_eq!(v.display_name, "Michigan");
    /// assert!(v.alternate_names.is_empty());
    /// ```
    pub fn new(name: impl Into<String>, conference: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            conference: conference.into(),
            alternate_names: BTreeSet::new(),
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Add alternate spellings
    pub fn with_alternate_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_names.extend(names.into_iter().map(Into::into));
        self
    }
}
