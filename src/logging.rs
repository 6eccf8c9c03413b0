//! Tracing setup for the `hexapi-gen` binary
//!
//! Two layers on one registry:
//! - console output on stderr at the configured level, pretty or JSON
//! - a plain-text file under the log directory at `debug`, rotated daily,
//!   keeping the three most recent files
//!
//! `RUST_LOG`, when set, replaces the console level.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::GeneratorConfig;

/// Prefix of the rotated log files
pub const LOG_FILE_PREFIX: &str = "hexapi";
/// Rotated files kept on disk
pub const MAX_LOG_FILES: usize = 3;

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Console level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Directory of the rotating log file, `None` to log to the console only
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            log_level: config.log_level.clone(),
            format: LogFormat::parse(&config.log_format),
            log_dir: config.log_dir().map(Path::to_path_buf),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Console level for a level name; unknown names fall back to `info`
#[must_use]
pub fn parse_level(s: &str) -> Level {
    match s.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive until
/// the process exits. `None` when file logging is disabled.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let level = parse_level(&config.log_level);
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
    };
    layers.push(console);

    let guard = match &config.log_dir {
        Some(dir) => {
            let (layer, guard) = file_layer(dir)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(guard)
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn file_layer(dir: &Path) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .with_filter(LevelFilter::DEBUG)
        .boxed();
    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" warn "), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("loud"), Level::INFO);
    }

    #[test]
    fn test_from_config() {
        let mut config = GeneratorConfig::default();
        let log = LogConfig::from_config(&config);
        assert_eq!(log.format, LogFormat::Pretty);
        assert_eq!(log.log_dir, Some(PathBuf::from("logs")));

        config.log_dir = PathBuf::new();
        config.log_format = "json".into();
        config.log_level = "debug".into();
        let log = LogConfig::from_config(&config);
        assert_eq!(log.log_dir, None);
        assert_eq!(log.format, LogFormat::Json);
        assert_eq!(log.log_level, "debug");
    }
}
