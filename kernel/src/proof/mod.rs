//! Proof layer: canonical JSON bytes and domain-separated content hashing.
//!
//! Depends on nothing else in the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
