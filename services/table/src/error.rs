//! services/table/src/error.rs
//!
//! Defines the primary error type for the table service.

use crate::config::ConfigError;
use people_table_core::ports::CoreError;

/// The primary error type for the `table` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the core crate.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Represents a failure to serialize the generated rows.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents a standard Input/Output error (e.g., writing to stdout).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
