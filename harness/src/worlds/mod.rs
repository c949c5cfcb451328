//! World implementations for the harness runner.

pub mod drone_delivery;
pub mod pc_store;
