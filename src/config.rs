//! Application configuration management
//!
//! The benchmark is deliberately closed: what it sorts, which algorithms run
//! and where results land are compiled in. Configuration is therefore built
//! from the defaults in [`crate::constants`] rather than loaded from the
//! environment; the structure still keeps one sub-config per concern so each
//! component takes only the section it needs.

use std::path::PathBuf;

use crate::constants::{RESULTS_FILE, SAMPLE_INPUT};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub results: ResultsConfig,
    pub benchmark: BenchmarkConfig,
}

/// Results log configuration
#[derive(Debug, Clone)]
pub struct ResultsConfig {
    /// Path of the append-only results log
    pub path: PathBuf,
}

/// Benchmark input configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// The dataset handed to every sorting worker
    pub input: Vec<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results: ResultsConfig {
                path: PathBuf::from(RESULTS_FILE),
            },
            benchmark: BenchmarkConfig {
                input: SAMPLE_INPUT.to_vec(),
            },
        }
    }
}
