//! Throughput measurement for synthesis runs.

use autoctor_codegen::GeneratedUnit;
use std::time::{Duration, Instant};

/// Result of a throughput run.
#[derive(Debug, Clone)]
pub struct ThroughputResult {
    /// Total types synthesized.
    pub types: u64,
    /// Total bytes of generated source.
    pub bytes: u64,
    /// Total duration.
    pub duration: Duration,
}

impl ThroughputResult {
    /// Returns types per second.
    #[must_use]
    pub fn types_per_second(&self) -> f64 {
        self.types as f64 / self.duration.as_secs_f64()
    }

    /// Returns generated bytes per second.
    #[must_use]
    pub fn bytes_per_second(&self) -> f64 {
        self.bytes as f64 / self.duration.as_secs_f64()
    }
}

/// Runs `generate_fn` `iterations` times and accumulates its output size.
pub fn run_synthesis_benchmark<F>(iterations: u64, mut generate_fn: F) -> ThroughputResult
where
    F: FnMut() -> Vec<GeneratedUnit>,
{
    let mut types = 0u64;
    let mut bytes = 0u64;
    let start = Instant::now();

    for _ in 0..iterations {
        let units = generate_fn();
        types += units.len() as u64;
        bytes += units.iter().map(|u| u.source.len() as u64).sum::<u64>();
    }

    ThroughputResult {
        types,
        bytes,
        duration: start.elapsed(),
    }
}
