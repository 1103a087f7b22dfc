use thiserror::Error;

/// Main error type for the replay buffer toolkit
#[derive(Error, Debug)]
pub enum ReplaykitError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Buffer serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    // Buffer file format errors
    #[error("Invalid buffer file: {0}")]
    InvalidFormat(String),

    #[error("Unsupported buffer format version: {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // Generic errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ReplaykitError
pub type Result<T> = std::result::Result<T, ReplaykitError>;
