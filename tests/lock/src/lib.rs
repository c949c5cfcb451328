//! Shared helpers for the lock tests: seeded input generators and
//! brute-force reference answers.

pub mod oracle;
