//! Frontier entry types and the ordering key.

use std::cmp::Ordering;

use costwise_kernel::model::VertexId;

/// Anything the frontier can order: exposes its cumulative path cost.
pub trait CostOrdered {
    /// Cumulative cost from the search root. The only ordering input.
    fn cumulative_cost(&self) -> f64;
}

/// The frontier ordering key: `(cost, creation_order)`.
///
/// Lower cost first; equal costs pop in insertion order. `cost` is compared
/// with [`f64::total_cmp`], so the order is total even for NaN.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub cost: f64,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// Graph search frontier entry.
///
/// Several entries for one vertex may coexist in the frontier; all but the
/// cheapest are stale by the time they pop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteNode {
    pub vertex: VertexId,
    pub cost: f64,
    /// Vertex this entry was relaxed from (`None` for the source).
    pub parent: Option<VertexId>,
}

impl CostOrdered for RouteNode {
    fn cumulative_cost(&self) -> f64 {
        self.cost
    }
}

/// A partial category assignment in the implicit selection tree.
///
/// `selection[k]` is the chosen item index within category `k`. The next
/// category to assign is always `selection.len()`, so each expansion step
/// advances it by exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialConfig {
    pub selection: Vec<usize>,
    pub cost: f64,
}

impl PartialConfig {
    /// The empty assignment at cost 0.
    #[must_use]
    pub fn root() -> Self {
        Self {
            selection: Vec::new(),
            cost: 0.0,
        }
    }

    #[must_use]
    pub fn next_category(&self) -> usize {
        self.selection.len()
    }

    /// This assignment extended with `item_index` for the next category.
    #[must_use]
    pub fn child(&self, item_index: usize, item_cost: f64) -> Self {
        let mut selection = Vec::with_capacity(self.selection.len() + 1);
        selection.extend_from_slice(&self.selection);
        selection.push(item_index);
        Self {
            selection,
            cost: self.cost + item_cost,
        }
    }
}

impl CostOrdered for PartialConfig {
    fn cumulative_cost(&self) -> f64 {
        self.cost
    }
}
