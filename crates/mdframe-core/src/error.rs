//! Error types for mdframe

use thiserror::Error;

/// Main error type for mdframe operations
#[derive(Error, Debug)]
pub enum MdframeError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The rendering host failed (e.g. it went away mid-render)
    #[error("Host error: {0}")]
    Host(String),

    /// Failure writing a document or node tree out
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type alias for mdframe operations
pub type Result<T> = std::result::Result<T, MdframeError>;
