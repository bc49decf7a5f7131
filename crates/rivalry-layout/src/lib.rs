//! Rivalry Layout
//!
//! Turns a shortest-path search into a radial picture centered on one team.
//!
//! # Overview
//!
//! - [`build_tree`]: reduce the shortest paths from a source to a
//!   [`DominanceTree`] with descendant counts and branch shares
//! - [`layout`]: place the tree on the plane, the source at the origin
//! - [`layout_all`]: also place every component the source cannot reach,
//!   each shifted to the right of the previous ones
//!
//! # Usage
//!
//! ```
//! use rivalry_domain::RivalryStore;
//! use rivalry_layout::{layout, LayoutConfig, LayoutScale};
//! use rivalry_store::RivalryGraph;
//!
//! let mut graph = RivalryGraph::new();
//! graph.add_conference("X", &["A", "B", "C"]).unwrap();
//! graph.update_edge("A", "B", 8.0).unwrap();
//! graph.update_edge("A", "C", 3.0).unwrap();
//!
//! let placed = layout(&graph, "A", &LayoutConfig::default(), LayoutScale::Detail).unwrap();
//! assert_eq!((placed["A"].x, placed["A"].y), (0.0, 0.0));
//! assert_eq!(placed["A"].children.len(), 2);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod radial;
mod tree;

pub use config::{LayoutConfig, LayoutScale};
pub use error::LayoutError;
pub use radial::{canyon_order, layout, layout_all, place_tree, Layout, NodePlacement};
pub use tree::{build_tree, DominanceTree, TreeNode};
