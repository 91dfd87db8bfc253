//! Error types for the ranker
//!
//! Fallible plumbing returns `anyhow::Result`; domain failures are described by
//! [`RankerError`] and converted with `.into()` where they cross into it.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ranking scenarios
#[derive(Debug, thiserror::Error)]
pub enum RankerError {
    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("Player not found: {player}")]
    PlayerNotFound { player: String },

    #[error("Rating storage failed: {message}")]
    StorageFailed { message: String },

    #[error("Export failed: {message}")]
    ExportFailed { message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
