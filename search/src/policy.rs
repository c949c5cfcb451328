//! Search policy types.

use crate::error::SearchError;

/// Per-invocation search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Upper bound on live frontier entries. `None` derives the structural
    /// worst case from the input (`edge_count + 1` for a graph, the implicit
    /// tree node count for a config space), which can never be exceeded.
    pub frontier_capacity: Option<usize>,
    /// Record the per-step event log in the result.
    pub record_trace: bool,
}

impl SearchPolicyV1 {
    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for an explicit capacity of 0,
    /// which could not even hold the root entry.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.frontier_capacity == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "frontier_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Capacity to allocate given the input's structural bound.
    #[must_use]
    pub fn effective_capacity(&self, structural_bound: usize) -> usize {
        self.frontier_capacity.unwrap_or(structural_bound.max(1))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_capacity": self.frontier_capacity,
            "record_trace": self.record_trace,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            frontier_capacity: None,
            record_trace: true,
        }
    }
}
