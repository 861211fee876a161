//! File logging
//!
//! The terminal is owned by the TUI, so log output goes to a daily rolling
//! file instead of stdout.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Log file prefix
const LOG_FILE_PREFIX: &str = "weaviate-tui.log";

/// Parse a level name, falling back to INFO for anything unknown
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Log destination and verbosity
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub level: LevelFilter,
}

impl LoggingConfig {
    pub fn new(log_dir: impl Into<PathBuf>, level: &str) -> Self {
        Self {
            log_dir: log_dir.into(),
            level: parse_level(level),
        }
    }

    /// Install the global subscriber
    ///
    /// The returned guard flushes buffered lines when dropped, so it must
    /// live until the application exits.
    pub fn init(self) -> Result<WorkerGuard> {
        std::fs::create_dir_all(&self.log_dir)?;

        let file_appender = rolling::daily(&self.log_dir, LOG_FILE_PREFIX);
        let (writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_filter(self.level);

        tracing_subscriber::registry().with(file_layer).try_init()?;

        Ok(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN "), LevelFilter::WARN);
        assert_eq!(parse_level("error"), LevelFilter::ERROR);
        assert_eq!(parse_level("verbose"), LevelFilter::INFO);
    }

    #[test]
    fn test_config_builder() {
        let config = LoggingConfig::new("/tmp/logs", "trace");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(config.level, LevelFilter::TRACE);
    }
}
