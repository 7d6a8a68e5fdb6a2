//! Error types for pgvista
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors with clear error chains.

use std::io;
use std::time::Duration;

/// Main error type for the pgvista application
#[derive(Debug, thiserror::Error)]
pub enum PgvistaError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Database operation errors.
///
/// Every failure an execution can produce is classified into one of these
/// variants at the executor boundary and surfaced as a status toast; none
/// of them terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Pool exhaustion or network failure
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// SQL syntax or semantic error from the engine
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Type-conversion failure while materializing a row value
    #[error("Could not decode column {column} ({pg_type})")]
    RowDecode { column: String, pg_type: String },

    /// Operation exceeded its bounded deadline
    #[error("Query timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Multi-statement guard refused the query
    #[error("Multiple statements detected; please run one at a time.")]
    MultipleStatements,
}

/// Configuration loading/parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// No connection target supplied
    #[error("No connection URL; pass --url or set DATABASE_URL")]
    NoConnectionUrl,

    /// Failed to read a config file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Specialized Result type for pgvista operations
pub type Result<T> = std::result::Result<T, PgvistaError>;

/// Specialized Result type for database operations
pub type DbResult<T> = std::result::Result<T, DbError>;

/// Specialized Result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
