//! Costwise Kernel: read-only search inputs and the proof layer.
//!
//! # Modules
//!
//! - [`model`] -- [`model::GraphModel`] (weighted directed graph) and
//!   [`model::ConfigSpace`] (ordered category catalog)
//! - [`proof`] -- canonical JSON bytes and domain-separated SHA-256 hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `model`
//!
//! `model` serializes itself through `proof` for digests. `proof` depends on
//! nothing internal.

#![forbid(unsafe_code)]

pub mod model;
pub mod proof;
