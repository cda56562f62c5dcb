//! Benchmark execution engine
//!
//! A benchmark run is one timed execution per algorithm, each on its own
//! worker with a private copy of the input. Workers never share data; the
//! only thing they touch in common is the results logger.

pub mod runner;

pub use runner::{run_and_log, run_timed};
