//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// RESULTS LOG DEFAULTS
// =============================================================================

/// File the timing results are appended to, relative to the working directory
pub const RESULTS_FILE: &str = "sorting_times.txt";

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// The dataset every algorithm sorts (each worker receives its own copy)
pub const SAMPLE_INPUT: [i32; 10] = [34, 7, 23, 32, 5, 62, 32, 45, 3, 1];

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default tracing filter when RUST_LOG is not set
pub const DEFAULT_RUST_LOG: &str = "sortbench=info";
