//! # Spyglass Utilities
//!
//! Shared utilities and logging for Spyglass.
//!
//! This crate provides the logging setup used by the Spyglass binary, built
//! on `tracing`.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{
    init_logging, init_logging_with_file, init_logging_with_level, LogFormat, LogLevel, LoggingError, LoggingGuard,
};
pub use tracing::{debug, error, info, trace, warn};
