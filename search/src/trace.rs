//! Search audit trail: per-step events and aggregate counters.
//!
//! The event log is the structured record of what a search did, in the order
//! it did it. Counters are always maintained; events only when
//! [`crate::policy::SearchPolicyV1::record_trace`] is set.

use costwise_kernel::model::VertexId;
use costwise_kernel::proof::canon::f64_to_hex;

/// Aggregate counters for one search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Frontier pops, stale or not ("nodes explored").
    pub extractions: u64,
    /// Pops that were expanded (graph: finalized vertices; config: partial
    /// assignments whose children were generated).
    pub expansions: u64,
    /// Pops discarded because their state was already finalized.
    pub stale_discarded: u64,
    /// Successful frontier pushes.
    pub insertions: u64,
    /// Children discarded by the budget bound without being inserted.
    pub pruned: u64,
    /// Eligible complete assignments scored: within budget, positive
    /// performance.
    pub complete_evaluated: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStatsV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "extractions": self.extractions,
            "expansions": self.expansions,
            "stale_discarded": self.stale_discarded,
            "insertions": self.insertions,
            "pruned": self.pruned,
            "complete_evaluated": self.complete_evaluated,
            "frontier_high_water": self.frontier_high_water,
        })
    }
}

/// Why a graph search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The goal vertex was finalized.
    GoalReached { vertex: VertexId },
    /// The frontier emptied first.
    FrontierExhausted,
}

impl TerminationReasonV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::GoalReached { vertex } => serde_json::json!({
                "type": "goal_reached",
                "vertex": vertex,
            }),
            Self::FrontierExhausted => serde_json::json!({ "type": "frontier_exhausted" }),
        }
    }
}

/// One step of a graph search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteEventV1 {
    /// A vertex popped for the first time; its cost is now final.
    Finalized { vertex: VertexId, cost: f64 },
    /// A popped entry for an already-finalized vertex was dropped.
    StaleDiscarded { vertex: VertexId, cost: f64 },
    /// A cheaper tentative cost was found and a new entry pushed.
    Inserted {
        vertex: VertexId,
        cost: f64,
        parent: VertexId,
    },
}

impl RouteEventV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match *self {
            Self::Finalized { vertex, cost } => serde_json::json!({
                "type": "finalized",
                "vertex": vertex,
                "cost": f64_to_hex(cost),
            }),
            Self::StaleDiscarded { vertex, cost } => serde_json::json!({
                "type": "stale_discarded",
                "vertex": vertex,
                "cost": f64_to_hex(cost),
            }),
            Self::Inserted {
                vertex,
                cost,
                parent,
            } => serde_json::json!({
                "type": "inserted",
                "vertex": vertex,
                "cost": f64_to_hex(cost),
                "parent": parent,
            }),
        }
    }
}

/// One step of a config-space search.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigEventV1 {
    /// A partial assignment popped and its children generated.
    Expanded { selection: Vec<usize>, cost: f64 },
    /// A child exceeded the budget and was discarded.
    Pruned { selection: Vec<usize>, cost: f64 },
    /// A complete assignment popped and scored.
    Evaluated {
        selection: Vec<usize>,
        cost: f64,
        performance: u32,
        eligible: bool,
    },
    /// A complete assignment replaced the best so far.
    NewBest {
        selection: Vec<usize>,
        cost: f64,
        ratio: f64,
    },
}

impl ConfigEventV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Expanded { selection, cost } => serde_json::json!({
                "type": "expanded",
                "selection": selection,
                "cost": f64_to_hex(*cost),
            }),
            Self::Pruned { selection, cost } => serde_json::json!({
                "type": "pruned",
                "selection": selection,
                "cost": f64_to_hex(*cost),
            }),
            Self::Evaluated {
                selection,
                cost,
                performance,
                eligible,
            } => serde_json::json!({
                "type": "evaluated",
                "selection": selection,
                "cost": f64_to_hex(*cost),
                "performance": performance,
                "eligible": eligible,
            }),
            Self::NewBest {
                selection,
                cost,
                ratio,
            } => serde_json::json!({
                "type": "new_best",
                "selection": selection,
                "cost": f64_to_hex(*cost),
                "ratio": f64_to_hex(*ratio),
            }),
        }
    }
}
