//! Timed benchmark runner

use std::time::Instant;

use tracing::info;

use crate::error::AppResult;
use crate::logger::TimingLogger;
use crate::models::TimingRecord;
use crate::sort::Algorithm;

/// Run `algorithm` over its own copy of the input and measure wall-clock time.
///
/// Milliseconds are truncated, so sub-millisecond runs report 0.
pub fn run_timed(algorithm: Algorithm, mut data: Vec<i32>) -> TimingRecord {
    let start = Instant::now();
    algorithm.sort(&mut data);
    let duration_ms = start.elapsed().as_millis() as u64;

    debug_assert!(data.windows(2).all(|w| w[0] <= w[1]));

    TimingRecord {
        algorithm,
        duration_ms,
    }
}

/// Run `algorithm`, then append its timing line to the shared results log.
///
/// The measurement is also emitted to diagnostic tracing. A log failure is
/// returned to the caller; it does not affect any other worker.
pub fn run_and_log(
    algorithm: Algorithm,
    data: Vec<i32>,
    logger: &TimingLogger,
) -> AppResult<TimingRecord> {
    let record = run_timed(algorithm, data);

    info!(
        algorithm = %record.algorithm,
        duration_ms = record.duration_ms,
        "Sort finished"
    );

    logger.log(&record.to_string())?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_timed_reports_the_algorithm_it_ran() {
        let record = run_timed(Algorithm::Shell, vec![3, 1, 2]);
        assert_eq!(record.algorithm, Algorithm::Shell);
    }

    #[test]
    fn test_run_and_log_appends_one_well_formed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.txt");
        let logger = TimingLogger::new(&path);

        let record = run_and_log(Algorithm::Quick, vec![5, 4, 3, 2, 1], &logger).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("Quick Sort: {} ms\n", record.duration_ms));
    }

    #[test]
    fn test_log_failure_is_returned_not_panicked() {
        let dir = tempfile::tempdir().unwrap();
        let logger = TimingLogger::new(dir.path());

        let result = run_and_log(Algorithm::Bubble, vec![2, 1], &logger);
        assert!(result.is_err());
    }
}
