//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for application-level operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the binary and loader edges.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a search index cannot be acquired.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file could not be read.
    #[error("Failed to read search index at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source is not a well-formed sequence of symbol records.
    #[error("Malformed search index: {0}")]
    Malformed(String),
}

/// Error returned when a scoring policy cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Weight for kind '{kind}' must be greater than zero")]
    ZeroWeight { kind: String },
    #[error("display_limit must be greater than zero")]
    ZeroDisplayLimit,
    #[error("depth_penalty must not be negative, got {0}")]
    NegativeDepthPenalty(i64),
}
