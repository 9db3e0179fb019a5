//! Logging infrastructure for development diagnostics
//!
//! The terminal belongs to the editor while it runs, so everything goes to a
//! log file: `~/.config/linepad/logs/linepad.log`, rotated daily.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=linepad::model::buffer=trace` - highlight cascade tracing
//! - `RUST_LOG=linepad::update=debug` - module-level filtering

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "info";

/// Build the filter: explicit level, then RUST_LOG, then `info`
fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initialize the file logging subscriber
///
/// Returns the appender guard, which must be held until exit so buffered
/// lines are flushed. Returns `None` (and logs nothing) if the log
/// directory can't be created.
pub fn init(level: Option<&str>) -> Option<WorkerGuard> {
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return None;
        }
    };

    let file_appender = tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(build_filter(level));

    tracing_subscriber::registry().with(file_layer).init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(build_filter(Some("trace")).to_string(), "trace");
    }
}
