//! # autoctor Bench
//!
//! Benchmarking utilities for autoctor performance testing.

pub mod fixtures;
pub mod throughput;
