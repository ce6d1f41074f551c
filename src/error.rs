//! Error types for the summarization pipeline.
//!
//! Extraction itself never fails; these errors come from validating its output
//! and from talking to the summarization endpoint.

use thiserror::Error;

/// Result type alias for gistrs operations
pub type Result<T> = std::result::Result<T, GistError>;

/// Errors that can occur between extraction and a returned summary
#[derive(Error, Debug)]
pub enum GistError {
    /// Invalid endpoint URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Extraction produced the failure sentinel or too little text
    #[error("Could not extract enough text from this article ({length} characters).")]
    InsufficientContent { length: usize },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Server error: {detail}")]
    Server { status: u16, detail: String },

    /// A success response whose body was not a summary
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// General error
    #[error("gistrs error: {0}")]
    Other(String),
}
