//! Logging initialization

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogConfig, DEFAULT_LOG_FILTER};

pub const LOG_FILE_NAME: &str = "crowdfund-client.log";

/// Initialize the logging system
///
/// Sets up:
/// - `EnvFilter` from the configured directives (falls back to the default filter)
/// - a stderr layer
/// - a daily-rotated, non-blocking file layer when `log_dir` is set
///
/// Returns the file writer's guard; keep it alive until shutdown so buffered
/// lines are flushed. Calling this twice is harmless: the second call leaves
/// the first subscriber in place.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .boxed();

    let mut guard = None;
    let file_layer = config.log_dir.as_deref().and_then(file_writer).map(|(writer, file_guard)| {
        guard = Some(file_guard);
        fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .boxed()
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            filter = %config.filter,
            log_dir = ?config.log_dir,
            "Logging initialized"
        );
        setup_panic_hook();
    }

    guard
}

/// Daily-rotated, non-blocking writer inside `dir`, creating it first.
fn file_writer(dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", dir.display(), e);
        return None;
    }
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    Some(tracing_appender::non_blocking(appender))
}

/// Log panics through tracing before the default hook runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");
        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_creates_dir_and_rotated_file() {
        let temp = tempfile::tempdir().unwrap();
        let log_dir = temp.path().join("logs");

        let (writer, guard) = file_writer(&log_dir).unwrap();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer().with_writer(writer).with_ansi(false),
        );
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("written to file");
        });
        drop(guard);

        assert!(log_dir.is_dir());
        let names: Vec<String> = fs::read_dir(&log_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|name| name.starts_with(LOG_FILE_NAME)));
    }

    #[test]
    fn test_file_writer_fails_when_dir_is_a_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        assert!(file_writer(temp.path()).is_none());
    }
}
