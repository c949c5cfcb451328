//! Costwise Harness: world-level orchestration for the search crate.
//!
//! The harness runs a world through the search layer
//! (`search_route` / `search_config`) and packages the result as a
//! self-verifying [`runner::RunReportV1`].
//!
//! The harness does NOT implement search or hashing; it delegates to
//! `costwise_search` and `costwise_kernel`. Worlds provide domain data only;
//! the harness owns orchestration and policy.

#![forbid(unsafe_code)]

pub mod config;
pub mod contract;
pub mod runner;
pub mod worlds;
