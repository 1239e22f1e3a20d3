use crate::config::LoggingConfig;
use crate::error::{CommonError, Result};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
///
/// When `config.dir` is set, logs go to a daily rolling file and the returned
/// guard must be kept alive until shutdown so buffered lines are flushed.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let guard = if let Some(log_dir) = &config.dir {
        let file_appender = tracing_appender::rolling::daily(log_dir, &config.file);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_ansi(false),
            )
            .try_init()
            .map_err(|e| CommonError::Logging(e.to_string()))?;
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_ansi(true),
            )
            .try_init()
            .map_err(|e| CommonError::Logging(e.to_string()))?;
        None
    };

    debug!(level = %config.level, dir = ?config.dir, "tracing initialised");
    Ok(guard)
}
