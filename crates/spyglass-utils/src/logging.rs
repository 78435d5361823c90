//! # Logging Utilities
//!
//! Logging infrastructure for Spyglass using `tracing`.
//!
//! Console output goes to **stderr**: stdout belongs to the dumps and stack
//! traces that Spyglass prints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spyglass_utils::init_logging;
//!
//! // Initialize with default settings (reads from RUST_LOG env var)
//! init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=spyglass_core=trace`)
//! - `SPYGLASS_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `SPYGLASS_LOG_FILE`: Optional path to a daily-rolled log file, in addition to the console

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(format!("{s}. Use 'pretty' or 'json'"))),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level (default for the CLI)
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose, logs every skipped member)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(format!(
                "{s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            ))),
        }
    }
}

/// Keeps the background file writer alive. Drop it only at shutdown, or
/// buffered log lines are lost.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LoggingGuard
{
    _file: Option<WorkerGuard>,
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (e.g., `debug`, `spyglass_core=trace`)
/// - `SPYGLASS_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
/// - `SPYGLASS_LOG_FILE`: Optional path to log file
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - `SPYGLASS_LOG_FORMAT` holds an unknown format
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    let log_file = env::var("SPYGLASS_LOG_FILE").ok().map(PathBuf::from);
    init_logging_with_file(log_file.as_deref())
}

/// Initialize logging like [`init_logging`], writing to `log_file` instead
/// of `SPYGLASS_LOG_FILE`
///
/// ## Errors
///
/// Same as [`init_logging`].
pub fn init_logging_with_file(log_file: Option<&Path>) -> Result<LoggingGuard, LoggingError>
{
    let format = match env::var("SPYGLASS_LOG_FORMAT") {
        Ok(s) => LogFormat::from_str(&s)?,
        Err(_) => LogFormat::Pretty,
    };

    // Read log level from RUST_LOG or default to WARN.
    // RUST_LOG can also carry more specific filters
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()));
    init_logging_internal(format, env_filter, log_file)
}

/// Initialize logging with explicit level and format
///
/// The level takes precedence over `RUST_LOG`.
///
/// ## Example
///
/// ```rust,no_run
/// use spyglass_utils::{init_logging_with_level, LogFormat, LogLevel};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty, None)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging_with_level(
    level: LogLevel,
    format: LogFormat,
    log_file: Option<&Path>,
) -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(format, level_filter(level), log_file)
}

/// Filter that enables exactly `level` and everything more severe
fn level_filter(level: LogLevel) -> EnvFilter
{
    EnvFilter::new(Level::from(level).to_string())
}

/// Internal initialization function
fn init_logging_internal(
    format: LogFormat,
    env_filter: EnvFilter,
    log_file: Option<&Path>,
) -> Result<LoggingGuard, LoggingError>
{
    let (file_writer, guard) = match log_file {
        Some(path) => {
            let file_appender = tracing_appender::rolling::daily(
                path.parent().unwrap_or_else(|| Path::new(".")),
                path.file_name().unwrap_or_default(),
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(non_blocking), LoggingGuard { _file: Some(guard) })
        }
        None => (None, LoggingGuard::default()),
    };

    let result = match format {
        LogFormat::Pretty => {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(env_filter.clone());

            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false) // No ANSI in files
                    .with_filter(env_filter)
            });

            Registry::default().with(console_layer).with(file_layer).try_init()
        }
        LogFormat::Json => {
            let console_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(io::stderr)
                .with_filter(env_filter.clone());

            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(env_filter)
            });

            Registry::default().with(console_layer).with(file_layer).try_init()
        }
    };

    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
    Ok(guard)
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),
}
