//! Run configuration: optional overrides layered over world defaults.
//!
//! Worlds do NOT declare policy. The runner derives the effective
//! [`SearchPolicyV1`] and budget from a [`RunConfig`], falling back to
//! defaults for anything left unset, and commits the result to the report.

use costwise_kernel::proof::canon::f64_to_hex;
use costwise_search::policy::SearchPolicyV1;

/// Trace recording is on unless a run turns it off.
const DEFAULT_RECORD_TRACE: bool = true;

/// Overrides for a single harness run. `None` uses the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Config-space budget. `None` uses the world's default budget.
    /// Ignored by route runs.
    pub budget: Option<f64>,
    /// Explicit frontier capacity. `None` uses the structural bound.
    pub frontier_capacity: Option<usize>,
    /// Event log recording. `None` uses `DEFAULT_RECORD_TRACE`.
    pub record_trace: Option<bool>,
}

impl RunConfig {
    /// The search policy this config resolves to.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicyV1 {
        SearchPolicyV1 {
            frontier_capacity: self.frontier_capacity,
            record_trace: self.record_trace.unwrap_or(DEFAULT_RECORD_TRACE),
        }
    }

    /// The budget this config resolves to for a world with `world_default`.
    #[must_use]
    pub fn effective_budget(&self, world_default: f64) -> f64 {
        self.budget.unwrap_or(world_default)
    }
}

/// JSON snapshot of the effective policy, as committed to a run report.
///
/// `budget` is present only for config-space runs.
#[must_use]
pub fn policy_snapshot_json(policy: &SearchPolicyV1, budget: Option<f64>) -> serde_json::Value {
    let mut json = serde_json::json!({
        "schema_version": "run_policy.v1",
        "search": policy.to_json_value(),
    });
    if let (Some(b), Some(obj)) = (budget, json.as_object_mut()) {
        obj.insert("budget".into(), serde_json::Value::String(f64_to_hex(b)));
    }
    json
}
