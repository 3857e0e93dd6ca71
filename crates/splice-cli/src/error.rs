//! Error types for splice-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from splice-core
    #[error(transparent)]
    Core(#[from] splice_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
