//! Harness runner: executes a world's search and packages a digested report.
//!
//! The runner uses ONLY search and kernel APIs. It does not implement any
//! search or hashing logic itself.
//!
//! # Pipeline
//!
//! ```text
//! world.graph()/space() → input digest
//!   → RunConfig → SearchPolicyV1 → policy snapshot → policy digest
//!   → search_route()/search_config() → canonical result bytes → result digest
//!   → report JSON (world id + three digests) → report digest
//! ```

use costwise_kernel::model::ModelError;
use costwise_kernel::proof::canon::{canonical_json_bytes, CanonError};
use costwise_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use costwise_search::config::{search_config, ConfigResultV1};
use costwise_search::error::SearchError;
use costwise_search::route::{search_route, RouteResultV1};
use tracing::info;

use crate::config::{policy_snapshot_json, RunConfig};
use crate::contract::{ConfigWorldV1, RouteWorldV1};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// The world's data did not form a valid model.
    WorldError(ModelError),
    /// The search rejected its inputs or hit its frontier bound.
    SearchFailed(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed(CanonError),
    /// A report's stored digest does not match its bytes.
    DigestMismatch {
        artifact: &'static str,
        expected: String,
        actual: String,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorldError(e) => write!(f, "world data invalid: {e}"),
            Self::SearchFailed(e) => write!(f, "search failed: {e}"),
            Self::CanonFailed(e) => write!(f, "canonical JSON failed: {e}"),
            Self::DigestMismatch {
                artifact,
                expected,
                actual,
            } => write!(
                f,
                "{artifact} digest mismatch: expected {expected}, got {actual}"
            ),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WorldError(e) => Some(e),
            Self::SearchFailed(e) => Some(e),
            Self::CanonFailed(e) => Some(e),
            Self::DigestMismatch { .. } => None,
        }
    }
}

impl From<ModelError> for RunError {
    fn from(e: ModelError) -> Self {
        Self::WorldError(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::SearchFailed(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed(e)
    }
}

/// Which search a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Route,
    Config,
}

impl RunMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::Config => "config",
        }
    }
}

/// Self-verifying record of one run.
///
/// `report_digest` commits to the world id, the mode, and the three
/// component digests. The component bytes are carried alongside so
/// [`verify_report`] can recompute everything.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReportV1 {
    pub world_id: String,
    pub mode: RunMode,
    /// Digest of the world's input model.
    pub input_digest: ContentHash,
    /// Canonical JSON bytes of the effective policy snapshot.
    pub policy_json: Vec<u8>,
    pub policy_digest: ContentHash,
    /// Canonical JSON bytes of the search result.
    pub result_bytes: Vec<u8>,
    pub result_digest: ContentHash,
    pub report_digest: ContentHash,
}

impl RunReportV1 {
    /// The JSON object `report_digest` is computed over.
    #[must_use]
    pub fn digest_basis(&self) -> serde_json::Value {
        serde_json::json!({
            "input_digest": self.input_digest.as_str(),
            "mode": self.mode.as_str(),
            "policy_digest": self.policy_digest.as_str(),
            "result_digest": self.result_digest.as_str(),
            "schema_version": "run_report.v1",
            "world_id": self.world_id,
        })
    }
}

/// A typed search result together with its report.
#[derive(Debug, Clone)]
pub struct RunOutcomeV1<R> {
    pub result: R,
    pub report: RunReportV1,
}

/// Run a route world's search under `config`.
///
/// # Errors
///
/// Returns [`RunError`] at any pipeline step.
pub fn run_route(
    world: &dyn RouteWorldV1,
    config: &RunConfig,
) -> Result<RunOutcomeV1<RouteResultV1>, RunError> {
    let graph = world.graph()?;
    let input_digest = graph.digest()?;
    let policy = config.search_policy();
    let policy_json = canonical_json_bytes(&policy_snapshot_json(&policy, None))?;

    let result = search_route(&graph, world.source(), world.goal(), &policy)?;
    let result_bytes = result.to_canonical_json_bytes()?;
    let result_digest = canonical_hash(HashDomain::RouteResult, &result_bytes);

    let report = assemble_report(
        world.world_id(),
        RunMode::Route,
        input_digest,
        policy_json,
        result_bytes,
        result_digest,
    )?;
    info!(
        world_id = world.world_id(),
        found = result.is_found(),
        report_digest = %report.report_digest,
        "route run complete"
    );
    Ok(RunOutcomeV1 { result, report })
}

/// Run a config world's search under `config`.
///
/// # Errors
///
/// Returns [`RunError`] at any pipeline step.
pub fn run_config(
    world: &dyn ConfigWorldV1,
    config: &RunConfig,
) -> Result<RunOutcomeV1<ConfigResultV1>, RunError> {
    let space = world.space()?;
    let input_digest = space.digest()?;
    let policy = config.search_policy();
    let budget = config.effective_budget(world.default_budget());
    let policy_json = canonical_json_bytes(&policy_snapshot_json(&policy, Some(budget)))?;

    let result = search_config(&space, budget, &policy)?;
    let result_bytes = result.to_canonical_json_bytes()?;
    let result_digest = canonical_hash(HashDomain::ConfigResult, &result_bytes);

    let report = assemble_report(
        world.world_id(),
        RunMode::Config,
        input_digest,
        policy_json,
        result_bytes,
        result_digest,
    )?;
    info!(
        world_id = world.world_id(),
        feasible = result.is_feasible(),
        report_digest = %report.report_digest,
        "config run complete"
    );
    Ok(RunOutcomeV1 { result, report })
}

/// Recompute every digest in `report` from its carried bytes.
///
/// The input digest is not checked here; it needs the world.
///
/// # Errors
///
/// Returns [`RunError::DigestMismatch`] naming the first artifact that
/// does not match, or [`RunError::CanonFailed`] if the basis cannot be
/// serialized.
pub fn verify_report(report: &RunReportV1) -> Result<(), RunError> {
    let result_domain = match report.mode {
        RunMode::Route => HashDomain::RouteResult,
        RunMode::Config => HashDomain::ConfigResult,
    };
    check_digest(
        "policy",
        &report.policy_digest,
        &canonical_hash(HashDomain::RunPolicy, &report.policy_json),
    )?;
    check_digest(
        "result",
        &report.result_digest,
        &canonical_hash(result_domain, &report.result_bytes),
    )?;
    let basis = canonical_json_bytes(&report.digest_basis())?;
    check_digest(
        "report",
        &report.report_digest,
        &canonical_hash(HashDomain::RunReport, &basis),
    )
}

fn check_digest(
    artifact: &'static str,
    stored: &ContentHash,
    recomputed: &ContentHash,
) -> Result<(), RunError> {
    if stored == recomputed {
        Ok(())
    } else {
        Err(RunError::DigestMismatch {
            artifact,
            expected: stored.as_str().to_string(),
            actual: recomputed.as_str().to_string(),
        })
    }
}

fn assemble_report(
    world_id: &str,
    mode: RunMode,
    input_digest: ContentHash,
    policy_json: Vec<u8>,
    result_bytes: Vec<u8>,
    result_digest: ContentHash,
) -> Result<RunReportV1, RunError> {
    let policy_digest = canonical_hash(HashDomain::RunPolicy, &policy_json);
    let mut report = RunReportV1 {
        world_id: world_id.to_string(),
        mode,
        input_digest,
        policy_json,
        policy_digest,
        result_bytes,
        result_digest,
        // Placeholder until the basis is serialized below.
        report_digest: canonical_hash(HashDomain::RunReport, &[]),
    };
    let basis = canonical_json_bytes(&report.digest_basis())?;
    report.report_digest = canonical_hash(HashDomain::RunReport, &basis);
    Ok(report)
}
