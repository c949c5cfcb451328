//! Read-only search inputs.
//!
//! Both models are built once by a caller and then only borrowed by the
//! search layer. Nothing here knows about frontiers or costs-so-far.

pub mod catalog;
pub mod error;
pub mod graph;

pub use catalog::{Category, ConfigSpace, ConfigSpaceBuilder, Item};
pub use error::ModelError;
pub use graph::{Edge, GraphModel, Neighbors, Vertex, VertexId};
