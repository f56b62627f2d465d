//! Error types for SubScout.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the verification engine.
///
/// Per-probe network failures are never reported here; they surface as
/// `alive: false` or a closed port in the results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The host admission gate was closed mid-run. `verify` never closes it.
    #[error("host admission gate closed before verification finished")]
    GateClosed,
}

/// Result type alias for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors raised while querying a passive subdomain source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request to {source_name} failed: {reason}")]
    Request { source_name: String, reason: String },

    #[error("{source_name} returned HTTP {status}")]
    Status { source_name: String, status: u16 },

    #[error("failed to parse {source_name} response: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid config format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Port(#[from] crate::types::PortError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;
