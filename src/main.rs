//! Sortbench - Application Entry Point
//!
//! Spawns one worker per sorting algorithm, waits for all of them and then
//! tells the user where the timings went.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::{bench, config::Config, constants, logger::TimingLogger, sort::Algorithm};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| constants::DEFAULT_RUST_LOG.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting sorting benchmark");

    let config = Config::default();

    // One logger for the whole process, created before any worker starts and
    // shared by reference with all of them.
    let logger = Arc::new(TimingLogger::new(config.results.path.clone()));

    // One blocking worker per algorithm; each owns its copy of the input.
    let mut workers = Vec::with_capacity(Algorithm::all().len());
    for algorithm in Algorithm::all() {
        let data = config.benchmark.input.clone();
        let logger = Arc::clone(&logger);
        let handle =
            tokio::task::spawn_blocking(move || bench::run_and_log(algorithm, data, &logger));
        workers.push((algorithm, handle));
    }

    for (algorithm, handle) in workers {
        match handle.await {
            Ok(Ok(record)) => {
                tracing::debug!(
                    algorithm = %algorithm,
                    duration_ms = record.duration_ms,
                    "Worker finished"
                );
            }
            Ok(Err(e)) => {
                tracing::error!(algorithm = %algorithm, error = %e, "Worker failed to record its timing");
            }
            Err(e) => {
                tracing::error!(algorithm = %algorithm, error = %e, "Worker task panicked");
            }
        }
    }

    println!(
        "Sorting complete. Timings were appended to {}",
        logger.path().display()
    );

    Ok(())
}
