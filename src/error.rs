//! Error types for Skeleton
//!
//! Only setup failures are errors. Everything that can go wrong while
//! compiling or polling is reported as an event and degrades the pass instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::messages::MessageTableError;

/// Result type alias for Skeleton operations
pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Main error type for Skeleton operations
#[derive(Error, Debug)]
pub enum SkeletonError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config value is structurally valid TOML but semantically wrong
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Message table could not be parsed
    #[error("invalid message table in {file}: {source}")]
    InvalidMessages {
        file: PathBuf,
        #[source]
        source: MessageTableError,
    },

    /// Config file not found
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
