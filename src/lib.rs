//! Sortbench - Concurrent Sorting Benchmark
//!
//! This library times three classic sorting algorithms over the same fixed
//! dataset, one concurrent worker per algorithm, and appends every
//! measurement to a shared results log.
//!
//! # Features
//!
//! - Bubble, shell and quick sort over identical private copies of the input
//! - Wall-clock measurement per run, reported in milliseconds
//! - A single mutex-guarded, append-only results logger shared by all workers
//! - Worker failures stay isolated; the other measurements still land
//!
//! # Architecture
//!
//! - **`sort`**: the algorithms, dispatched through an enum
//! - **`bench`**: the timed runner wrapping each algorithm
//! - **`logger`**: the shared append-only results sink
//! - **`models`**: the timing record and its log-line rendering

pub mod bench;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod models;
pub mod sort;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use logger::TimingLogger;
pub use models::TimingRecord;
pub use sort::Algorithm;
