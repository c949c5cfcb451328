//! Budget-bounded uniform-cost exploration of a [`ConfigSpace`].
//!
//! Nodes are [`PartialConfig`]s, generated on demand: the children of a node
//! assign each item of the next category in turn. A child whose cumulative
//! cost exceeds the budget is discarded without being inserted.
//!
//! The objective (performance per unit cost) is not monotone in cost, so the
//! first complete assignment popped is not necessarily the best. The search
//! drains the whole feasible frontier; cost order only decides discovery
//! order, which in turn decides ties (the first configuration to reach a
//! ratio keeps it).

use costwise_kernel::model::ConfigSpace;
use costwise_kernel::proof::canon::{canonical_json_bytes, f64_to_hex, CanonError};
use costwise_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use tracing::{debug, info, warn};

use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::node::PartialConfig;
use crate::policy::SearchPolicyV1;
use crate::trace::{ConfigEventV1, SearchStatsV1};

/// One chosen item in a complete configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItemV1 {
    pub category: String,
    pub item_index: usize,
    pub name: String,
    pub cost: f64,
    pub performance: u32,
}

/// A complete assignment with its derived scores.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteConfigV1 {
    pub selection: Vec<usize>,
    pub items: Vec<SelectedItemV1>,
    pub cost: f64,
    /// Weighted performance, truncated to an integer.
    pub performance: u32,
    /// `performance / cost`.
    pub ratio: f64,
}

impl CompleteConfigV1 {
    /// Score a complete selection against `space`.
    ///
    /// Returns `None` if `selection` does not assign every category or
    /// names a missing item.
    #[must_use]
    pub fn evaluate(space: &ConfigSpace, selection: &[usize]) -> Option<Self> {
        let performance = space.weighted_performance(selection)?;
        let cost = space.selection_cost(selection)?;
        let items = space
            .resolve(selection)?
            .into_iter()
            .zip(space.categories())
            .zip(selection)
            .map(|((item, category), &item_index)| SelectedItemV1 {
                category: category.name.clone(),
                item_index,
                name: item.name.clone(),
                cost: item.cost,
                performance: item.performance,
            })
            .collect();
        Some(Self {
            selection: selection.to_vec(),
            items,
            cost,
            performance,
            ratio: f64::from(performance) / cost,
        })
    }

    /// Whether this configuration may be reported as a result under `budget`.
    #[must_use]
    pub fn is_eligible(&self, budget: f64) -> bool {
        self.cost <= budget && self.cost > 0.0 && self.performance > 0
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let items: Vec<serde_json::Value> = self
            .items
            .iter()
            .map(|i| {
                serde_json::json!({
                    "category": i.category,
                    "item_index": i.item_index,
                    "name": i.name,
                    "cost": f64_to_hex(i.cost),
                    "performance": i.performance,
                })
            })
            .collect();
        serde_json::json!({
            "selection": self.selection,
            "items": items,
            "cost": f64_to_hex(self.cost),
            "performance": self.performance,
            "ratio": f64_to_hex(self.ratio),
        })
    }
}

/// Outcome of a config-space search. Immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResultV1 {
    pub budget: f64,
    /// Best eligible configuration, or `None` if nothing feasible completed.
    pub best: Option<CompleteConfigV1>,
    pub stats: SearchStatsV1,
    /// Per-step events; empty unless the policy recorded a trace.
    pub trace: Vec<ConfigEventV1>,
}

impl ConfigResultV1 {
    /// Returns `true` if some configuration fit the budget.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.best.is_some()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let trace: Vec<serde_json::Value> =
            self.trace.iter().map(ConfigEventV1::to_json_value).collect();
        serde_json::json!({
            "budget": f64_to_hex(self.budget),
            "best": self.best.as_ref().map(CompleteConfigV1::to_json_value),
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
        Ok(canonical_hash(HashDomain::ConfigResult, &bytes))
    }
}

/// Find the complete assignment with the best performance-per-cost ratio
/// whose cost does not exceed `budget`.
///
/// An infeasible budget is a normal outcome: the result has `best: None`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] or [`SearchError::InvalidBudget`]
/// before searching, and [`SearchError::Capacity`] if an explicit frontier
/// capacity is too small for the space.
pub fn search_config(
    space: &ConfigSpace,
    budget: f64,
    policy: &SearchPolicyV1,
) -> Result<ConfigResultV1, SearchError> {
    policy.validate()?;
    if budget.is_nan() {
        return Err(SearchError::InvalidBudget {
            detail: "budget is NaN".into(),
        });
    }

    let total = space.category_count();
    let capacity = policy.effective_capacity(space.implicit_node_count());
    let mut frontier = PriorityFrontier::with_capacity(capacity);
    let mut stats = SearchStatsV1::default();
    let mut trace = Vec::new();
    let mut best: Option<CompleteConfigV1> = None;

    debug!(budget, categories = total, capacity, "config search started");

    frontier.push(PartialConfig::root())?;

    while !frontier.is_empty() {
        let node = frontier.pop()?;
        stats.extractions += 1;

        if node.next_category() == total {
            let Some(complete) = CompleteConfigV1::evaluate(space, &node.selection) else {
                continue;
            };
            let eligible = complete.is_eligible(budget);
            if eligible {
                stats.complete_evaluated += 1;
            }
            if policy.record_trace {
                trace.push(ConfigEventV1::Evaluated {
                    selection: node.selection.clone(),
                    cost: node.cost,
                    performance: complete.performance,
                    eligible,
                });
            }
            let improves = match &best {
                Some(b) => complete.ratio > b.ratio,
                None => true,
            };
            if eligible && improves {
                info!(
                    ratio = complete.ratio,
                    cost = complete.cost,
                    performance = complete.performance,
                    "new best configuration"
                );
                if policy.record_trace {
                    trace.push(ConfigEventV1::NewBest {
                        selection: node.selection.clone(),
                        cost: complete.cost,
                        ratio: complete.ratio,
                    });
                }
                best = Some(complete);
            }
            continue;
        }

        stats.expansions += 1;
        if policy.record_trace {
            trace.push(ConfigEventV1::Expanded {
                selection: node.selection.clone(),
                cost: node.cost,
            });
        }
        debug!(
            category = node.next_category(),
            cost = node.cost,
            "expanding partial configuration"
        );

        for (index, item) in space.items_of(node.next_category()).iter().enumerate() {
            let child = node.child(index, item.cost);
            if child.cost > budget {
                stats.pruned += 1;
                if policy.record_trace {
                    trace.push(ConfigEventV1::Pruned {
                        selection: child.selection,
                        cost: child.cost,
                    });
                }
                continue;
            }
            if let Err(err) = frontier.push(child) {
                warn!(capacity, "config frontier full");
                return Err(err);
            }
        }
    }

    stats.insertions = frontier.insertions();
    stats.frontier_high_water = frontier.high_water() as u64;

    match &best {
        Some(b) => info!(ratio = b.ratio, cost = b.cost, "config search finished"),
        None => info!(budget, "no feasible configuration"),
    }

    Ok(ConfigResultV1 {
        budget,
        best,
        stats,
        trace,
    })
}
