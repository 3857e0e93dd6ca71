//! Error types for splice-core

/// Result type for splice-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in splice-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Job configuration failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Filesystem error from splice-fs
    #[error(transparent)]
    Fs(#[from] splice_fs::Error),

    /// Extraction, location or splice error from splice-blocks
    #[error(transparent)]
    Blocks(#[from] splice_blocks::Error),
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
