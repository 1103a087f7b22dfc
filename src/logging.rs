use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Console plus optional rolling-file logging for mutating commands.
///
/// File logging is opt-in via `REPLAYKIT_LOG_DIR`.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},replaykit=debug", config.level)));

    let file_layer = match std::env::var("REPLAYKIT_LOG_DIR") {
        Ok(log_dir) if std::fs::create_dir_all(&log_dir).is_ok() => {
            // `tracing_appender::rolling::daily` panics if it can't create the
            // initial log file, so preflight writability first.
            let test_path = std::path::Path::new(&log_dir).join(".replaykit_write_test");
            match std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&test_path)
            {
                Ok(_) => {
                    let _ = std::fs::remove_file(&test_path);

                    // Daily rotating file appender
                    let file_appender = tracing_appender::rolling::daily(&log_dir, "replaykit.log");
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    // Keep the guard alive for the remainder of the process
                    Box::leak(Box::new(guard));

                    Some(
                        tracing_subscriber::fmt::layer()
                            .with_writer(non_blocking)
                            .with_ansi(false)
                            .with_target(true),
                    )
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not write to log directory {} ({}), file logging disabled",
                        log_dir, e
                    );
                    None
                }
            }
        }
        Ok(log_dir) => {
            eprintln!(
                "Warning: Could not create log directory {}, file logging disabled",
                log_dir
            );
            None
        }
        Err(_) => None,
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Minimal logging for read-only CLI commands.
pub fn init_logging_simple() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
