//! Benchmark result models

use serde::{Deserialize, Serialize};

use crate::sort::Algorithm;

/// Timing measurement for a single sorting run
///
/// Ephemeral: produced by a worker, rendered into its results-log line and
/// dropped. `Display` yields the exact line format, `"<name>: <ms> ms"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingRecord {
    /// The algorithm that was measured
    pub algorithm: Algorithm,
    /// Wall clock time in milliseconds, truncated
    pub duration_ms: u64,
}

impl std::fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ms", self.algorithm, self.duration_ms)
    }
}
