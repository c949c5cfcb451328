//! Weighted directed graph with named vertices.
//!
//! Adjacency is stored per source vertex in insertion order and read back in
//! reverse, so [`GraphModel::neighbors`] yields the most recently added edge
//! first. Parallel edges between the same pair are kept as separate entries.
//!
//! Edge weights are not validated. Uniform-cost search is only optimal for
//! non-negative weights; a negative weight silently breaks that guarantee.

use crate::proof::canon::{canonical_json_bytes, f64_to_hex, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

use super::error::ModelError;

/// Dense vertex identifier, assigned in creation order starting at 0.
pub type VertexId = usize;

/// A named vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
}

/// A directed weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

/// Adjacency-list graph. Built once, then borrowed read-only by searches.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl GraphModel {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `count` vertices named `Local_0 .. Local_{count-1}`.
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self::new();
        for i in 0..count {
            graph.add_vertex(format!("Local_{i}"));
        }
        graph
    }

    /// Add a vertex and return its id.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            id,
            name: name.into(),
        });
        self.adjacency.push(Vec::new());
        id
    }

    /// Rename an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVertex`] if `id` is out of range.
    pub fn set_name(&mut self, id: VertexId, name: impl Into<String>) -> Result<(), ModelError> {
        self.check_vertex(id)?;
        self.vertices[id].name = name.into();
        Ok(())
    }

    /// Add a directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVertex`] if either endpoint is out of range.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<(), ModelError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(Edge {
            source: from,
            target: to,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Add `a -> b` and `b -> a` with the same weight.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVertex`] if either endpoint is out of range.
    /// No edge is added in that case.
    pub fn add_undirected_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
    ) -> Result<(), ModelError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Outgoing edges of `id`, most recently added first.
    ///
    /// Unknown ids yield an empty sequence. The iterator borrows the graph and
    /// can be recreated any number of times.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> Neighbors<'_> {
        let edges = self.adjacency.get(id).map_or(&[][..], Vec::as_slice);
        Neighbors {
            inner: edges.iter().rev(),
        }
    }

    /// Weight of the first `from -> to` edge in neighbor order.
    #[must_use]
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.neighbors(from)
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id).map(|v| v.name.as_str())
    }

    /// Id of the first vertex with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<VertexId> {
        self.vertices.iter().find(|v| v.name == name).map(|v| v.id)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    /// Snapshot of names and adjacency (neighbor order) as JSON.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let vertices: Vec<serde_json::Value> = self
            .vertices
            .iter()
            .map(|v| {
                let edges: Vec<serde_json::Value> = self
                    .neighbors(v.id)
                    .map(|e| {
                        serde_json::json!({
                            "target": e.target,
                            "weight": f64_to_hex(e.weight),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "id": v.id,
                    "name": v.name,
                    "edges": edges,
                })
            })
            .collect();
        serde_json::json!({ "vertices": vertices })
    }

    /// Content digest of [`GraphModel::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::GraphModel, &bytes))
    }

    fn check_vertex(&self, id: VertexId) -> Result<(), ModelError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(ModelError::UnknownVertex {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }
}

/// Iterator over a vertex's outgoing edges. See [`GraphModel::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: std::iter::Rev<std::slice::Iter<'a, Edge>>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
