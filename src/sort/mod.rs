//! Sorting algorithms under benchmark
//!
//! One submodule per algorithm, dispatched through [`Algorithm`]. All three
//! sort a slice of `i32` in place and never touch anything outside it.

pub mod bubble;
pub mod quick;
pub mod shell;

use serde::{Deserialize, Serialize};

/// A sorting algorithm known to the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent-swap bubble sort
    Bubble,
    /// Diminishing-increment shell sort
    Shell,
    /// Hoare-partition quick sort
    Quick,
}

impl Algorithm {
    /// All algorithms, in the order they are benchmarked
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::Bubble, Algorithm::Shell, Algorithm::Quick]
    }

    /// Sort `data` in place with this algorithm
    pub fn sort(&self, data: &mut [i32]) {
        match self {
            Algorithm::Bubble => bubble::sort(data),
            Algorithm::Shell => shell::sort(data),
            Algorithm::Quick => quick::sort(data),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bubble => write!(f, "Bubble Sort"),
            Algorithm::Shell => write!(f, "Shell Sort"),
            Algorithm::Quick => write!(f, "Quick Sort"),
        }
    }
}
