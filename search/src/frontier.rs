//! Bounded min-cost frontier with lazy deletion.
//!
//! Array-backed binary heap (`BinaryHeap` over `Reverse<FrontierKey>`).
//! There is no decrease-key: a cheaper path to a known state is a new
//! entry, and callers discard stale entries when they pop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::SearchError;
use crate::node::{CostOrdered, FrontierKey};

/// A heap entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the lowest cost first.
#[derive(Debug)]
struct FrontierEntry<T> {
    key: Reverse<FrontierKey>,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-cost priority frontier with a fixed upper bound on live entries.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) push and pop
/// - A creation counter so equal-cost entries pop first-in first-out
/// - A high-water mark of the live entry count
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    capacity: usize,
    next_creation_order: u64,
    high_water: usize,
}

impl<T: CostOrdered> PriorityFrontier<T> {
    /// Create an empty frontier holding at most `capacity` entries at once.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            capacity,
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Insert an item keyed by its cumulative cost.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Capacity`] if the frontier is full. The item
    /// is not inserted.
    pub fn push(&mut self, item: T) -> Result<(), SearchError> {
        if self.heap.len() >= self.capacity {
            return Err(SearchError::Capacity {
                capacity: self.capacity,
            });
        }
        let key = FrontierKey {
            cost: item.cumulative_cost(),
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
        Ok(())
    }

    /// Remove and return the lowest-cost item.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Empty`] if no entries remain.
    pub fn pop(&mut self) -> Result<T, SearchError> {
        self.heap.pop().map(|e| e.item).ok_or(SearchError::Empty)
    }

    /// Cost of the entry [`PriorityFrontier::pop`] would return next.
    #[must_use]
    pub fn peek_cost(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.key.0.cost)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total successful pushes over the frontier's lifetime.
    #[must_use]
    pub fn insertions(&self) -> u64 {
        self.next_creation_order
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
