//! Error types for channel queries.

use thiserror::Error;

/// Result type for channel queries.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while querying the video source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Channel query failed: {0}")]
    QueryFailed(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    ApiStatus { status: u16 },

    #[error("No candidate videos in the API response")]
    NoCandidates,

    #[error("Channel branding not found in the API response")]
    BrandingNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Create an API status error.
    pub fn api_status(status: u16) -> Self {
        Self::ApiStatus { status }
    }
}
