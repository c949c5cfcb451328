//! World contracts: the minimal traits a dataset must implement to be run.
//!
//! Worlds provide domain data only (a model, endpoints, a default budget).
//! Worlds may NOT search, hash, or choose policy; those are runner concerns.

use costwise_kernel::model::{ConfigSpace, GraphModel, ModelError, VertexId};

/// A world whose question is "cheapest route from `source` to `goal`".
pub trait RouteWorldV1 {
    /// Unique world identifier (e.g., `"drone_delivery"`).
    fn world_id(&self) -> &str;

    /// Build the graph.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the world's own data is malformed.
    fn graph(&self) -> Result<GraphModel, ModelError>;

    fn source(&self) -> VertexId;

    fn goal(&self) -> VertexId;
}

/// A world whose question is "best performance per cost under a budget".
pub trait ConfigWorldV1 {
    /// Unique world identifier (e.g., `"pc_store"`).
    fn world_id(&self) -> &str;

    /// Build the category catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the world's own data is malformed.
    fn space(&self) -> Result<ConfigSpace, ModelError>;

    /// Budget used when the run config does not override it.
    fn default_budget(&self) -> f64;
}
