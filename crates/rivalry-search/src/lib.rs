//! Rivalry Search
//!
//! Shortest-path engine for the rivalry web.
//!
//! # Overview
//!
//! - [`shortest_paths`]: Dijkstra from one source to every reachable team
//! - [`parity_paths`]: lightest even-hop and odd-hop paths, computed as
//!   Dijkstra over a two-layer (vertex, parity) graph
//! - [`path_between`], [`rooting_choice`], [`stance`]: fan-facing answers
//!   built on the two searches
//!
//! Every search is generic over [`rivalry_domain::GraphView`], borrows the
//! graph immutably, and returns freshly allocated [`rivalry_domain::Path`]
//! values. Frontier ties on exact weight are broken by insertion order, so
//! results are deterministic.
//!
//! # Usage
//!
//! ```
//! use rivalry_domain::RivalryStore;
//! use rivalry_search::{parity_paths, shortest_paths};
//! use rivalry_store::RivalryGraph;
//!
//! let mut graph = RivalryGraph::new();
//! graph.add_conference("X", &["A", "B", "C"]).unwrap();
//! graph.update_edge("A", "B", 8.0).unwrap();
//! graph.update_edge("B", "C", 8.0).unwrap();
//!
//! let paths = shortest_paths(&graph, "A").unwrap();
//! assert_eq!(paths["C"].vertices(), ["A", "B", "C"]);
//!
//! let split = parity_paths(&graph, "A").unwrap();
//! assert!(split.even.contains_key("C"));
//! assert!(split.odd.contains_key("B"));
//! ```

#![warn(missing_docs)]

mod advice;
mod error;
mod frontier;
mod parity;
mod shortest;

pub use advice::{path_between, rooting_choice, stance, Opinion, PathReport, RootingAdvice, Stance};
pub use error::SearchError;
pub use parity::{parity_paths, ParityPaths};
pub use shortest::{shortest_paths, PathMap};
