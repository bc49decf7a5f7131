//! Rivalry Domain Layer
//!
//! This crate contains the value types and trait seams for the rivalry web.
//! It performs no I/O and depends only on `serde` for (de)serialization of
//! its value objects.
//!
//! ## Key Concepts
//!
//! - **Vertex**: A team, identified by its unique name
//! - **Edge**: A directed rivalry with a 1-10 strength and a derived weight
//! - **Weight**: `1.0 + 0.95 / (1 + e^(0.7 (s - 5)))`, lower means a stronger rivalry
//! - **Path**: An ordered walk from a source with its accumulated weight
//! - **Parity**: Whether a path has an even ("ally") or odd ("rival") hop count
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - The graph store lives in `rivalry-store`
//! - Algorithms are generic over [`GraphView`] and live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod path;
pub mod strength;
pub mod traits;
pub mod vertex;

// Re-exports for convenience
pub use edge::Edge;
pub use path::{Parity, Path};
pub use strength::{calculate_weight, normalize_strengths};
pub use traits::{GraphView, RivalryStore};
pub use vertex::{Vertex, VertexId};
