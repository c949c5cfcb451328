//! Costwise Search: uniform-cost search over graphs and config spaces.
//!
//! This crate provides the search layer. It depends only on
//! `costwise_kernel`; it does NOT depend on `costwise_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! costwise_kernel  ←  costwise_search  ←  costwise_harness
//! (inputs, proof)     (frontier, UCS)     (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`frontier::PriorityFrontier`] -- bounded min-cost heap, FIFO on ties
//! - [`route::search_route`] -- cheapest path between two graph vertices
//! - [`config::search_config`] -- best performance-per-cost assignment under
//!   a budget
//! - [`policy::SearchPolicyV1`] -- frontier capacity and trace recording
//! - [`trace::SearchStatsV1`] -- counters carried by every result

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod route;
pub mod trace;
