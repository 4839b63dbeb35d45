//! Run-level error types.

use thiserror::Error;

use shortify_media::MediaError;
use shortify_source::SourceError;

pub type RunResult<T> = Result<T, RunError>;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("No candidate produced a short after {trials} trials")]
    TrialsExhausted { trials: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
