//! Uniform-cost search over an explicit [`GraphModel`].
//!
//! # Vertex states
//!
//! `Unvisited` (cost = +inf) → `Frontier` (tentative cost, may have several
//! entries) → `Finalized` (cost optimal, popped once).
//!
//! The first pop of a vertex finalizes it. Later pops of the same vertex are
//! stale and dropped. A relaxation only touches the cost and parent tables
//! of vertices that are not yet finalized, but a strictly cheaper candidate
//! is always pushed; with non-negative weights a finalized vertex never sees
//! one, so that push only happens under negative weights and the entry is
//! dropped as stale.

use costwise_kernel::model::{GraphModel, VertexId};
use costwise_kernel::proof::canon::{canonical_json_bytes, f64_to_hex, CanonError};
use costwise_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use tracing::{debug, info, warn};

use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::node::RouteNode;
use crate::policy::SearchPolicyV1;
use crate::trace::{RouteEventV1, SearchStatsV1, TerminationReasonV1};

/// One edge traversal along a found route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLegV1 {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Outcome of a graph search. Immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResultV1 {
    pub source: VertexId,
    pub goal: VertexId,
    pub termination: TerminationReasonV1,
    /// Optimal cost, or `f64::INFINITY` when the goal is unreachable.
    pub cost: f64,
    /// Vertices from source to goal inclusive; empty when unreachable.
    pub path: Vec<VertexId>,
    /// Edges along `path`, with the weight of the edge that was relaxed.
    pub legs: Vec<RouteLegV1>,
    pub stats: SearchStatsV1,
    /// Per-step events; empty unless the policy recorded a trace.
    pub trace: Vec<RouteEventV1>,
}

impl RouteResultV1 {
    /// Returns `true` if the goal was reached.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.termination, TerminationReasonV1::GoalReached { .. })
    }

    /// Sum of leg weights, accumulated from the source. Equals
    /// [`RouteResultV1::cost`] bit for bit when the goal was reached.
    #[must_use]
    pub fn path_cost(&self) -> f64 {
        if !self.is_found() {
            return f64::INFINITY;
        }
        self.legs.iter().fold(0.0, |acc, leg| acc + leg.weight)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let legs: Vec<serde_json::Value> = self
            .legs
            .iter()
            .map(|leg| {
                serde_json::json!({
                    "from": leg.from,
                    "to": leg.to,
                    "weight": f64_to_hex(leg.weight),
                })
            })
            .collect();
        let trace: Vec<serde_json::Value> =
            self.trace.iter().map(RouteEventV1::to_json_value).collect();
        serde_json::json!({
            "source": self.source,
            "goal": self.goal,
            "termination_reason": self.termination.to_json_value(),
            "cost": f64_to_hex(self.cost),
            "path": self.path,
            "legs": legs,
            "stats": self.stats.to_json_value(),
            "trace": trace,
        })
    }

    /// Serialize the result to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::RouteResult, &bytes))
    }
}

/// Per-invocation scratch tables, indexed by vertex id.
struct RouteTables {
    best: Vec<f64>,
    parent: Vec<Option<(VertexId, f64)>>,
    finalized: Vec<bool>,
}

impl RouteTables {
    fn new(vertex_count: usize) -> Self {
        Self {
            best: vec![f64::INFINITY; vertex_count],
            parent: vec![None; vertex_count],
            finalized: vec![false; vertex_count],
        }
    }

    /// Follow parent links from `goal` back to the root and reverse.
    fn reconstruct(&self, goal: VertexId) -> (Vec<VertexId>, Vec<RouteLegV1>) {
        let mut path = vec![goal];
        let mut legs = Vec::new();
        let mut current = goal;
        while let Some((prev, weight)) = self.parent[current] {
            legs.push(RouteLegV1 {
                from: prev,
                to: current,
                weight,
            });
            path.push(prev);
            current = prev;
        }
        path.reverse();
        legs.reverse();
        (path, legs)
    }
}

/// Find a minimum-cost path from `source` to `goal`.
///
/// Not finding the goal is a normal outcome: the result has
/// [`TerminationReasonV1::FrontierExhausted`], infinite cost, and an empty
/// path.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] or [`SearchError::UnknownVertex`]
/// before searching, and [`SearchError::Capacity`] if an explicit frontier
/// capacity is too small for the graph.
pub fn search_route(
    graph: &GraphModel,
    source: VertexId,
    goal: VertexId,
    policy: &SearchPolicyV1,
) -> Result<RouteResultV1, SearchError> {
    policy.validate()?;
    for id in [source, goal] {
        if !graph.contains(id) {
            return Err(SearchError::UnknownVertex {
                id,
                vertex_count: graph.vertex_count(),
            });
        }
    }

    let capacity = policy.effective_capacity(graph.edge_count().saturating_add(1));
    let mut frontier = PriorityFrontier::with_capacity(capacity);
    let mut tables = RouteTables::new(graph.vertex_count());
    let mut stats = SearchStatsV1::default();
    let mut trace = Vec::new();

    debug!(source, goal, capacity, "route search started");

    tables.best[source] = 0.0;
    frontier.push(RouteNode {
        vertex: source,
        cost: 0.0,
        parent: None,
    })?;

    let mut goal_cost = None;
    while !frontier.is_empty() {
        let node = frontier.pop()?;
        stats.extractions += 1;

        if tables.finalized[node.vertex] {
            stats.stale_discarded += 1;
            if policy.record_trace {
                trace.push(RouteEventV1::StaleDiscarded {
                    vertex: node.vertex,
                    cost: node.cost,
                });
            }
            continue;
        }
        tables.finalized[node.vertex] = true;
        stats.expansions += 1;
        if policy.record_trace {
            trace.push(RouteEventV1::Finalized {
                vertex: node.vertex,
                cost: node.cost,
            });
        }
        debug!(vertex = node.vertex, cost = node.cost, parent = ?node.parent, "finalized");

        if node.vertex == goal {
            goal_cost = Some(node.cost);
            break;
        }

        for edge in graph.neighbors(node.vertex) {
            let candidate = node.cost + edge.weight;
            let target = edge.target;
            if candidate >= tables.best[target] {
                continue;
            }
            if !tables.finalized[target] {
                tables.best[target] = candidate;
                tables.parent[target] = Some((node.vertex, edge.weight));
            }
            if let Err(err) = frontier.push(RouteNode {
                vertex: target,
                cost: candidate,
                parent: Some(node.vertex),
            }) {
                warn!(capacity, vertex = target, "route frontier full");
                return Err(err);
            }
            if policy.record_trace {
                trace.push(RouteEventV1::Inserted {
                    vertex: target,
                    cost: candidate,
                    parent: node.vertex,
                });
            }
            debug!(vertex = target, cost = candidate, parent = node.vertex, "inserted");
        }
    }

    stats.insertions = frontier.insertions();
    stats.frontier_high_water = frontier.high_water() as u64;

    let result = match goal_cost {
        Some(cost) => {
            let (path, legs) = tables.reconstruct(goal);
            info!(cost, hops = legs.len(), "route found");
            RouteResultV1 {
                source,
                goal,
                termination: TerminationReasonV1::GoalReached { vertex: goal },
                cost,
                path,
                legs,
                stats,
                trace,
            }
        }
        None => {
            info!(source, goal, "route not found");
            RouteResultV1 {
                source,
                goal,
                termination: TerminationReasonV1::FrontierExhausted,
                cost: f64::INFINITY,
                path: Vec::new(),
                legs: Vec::new(),
                stats,
                trace,
            }
        }
    };
    Ok(result)
}
