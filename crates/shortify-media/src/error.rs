//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur during media fetching and composition.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("yt-dlp not found in PATH")]
    YtDlpNotFound,

    #[error("No matching adaptive stream: {message}")]
    StreamUnavailable { message: String },

    #[error("Download failed: {message}")]
    DownloadFailed { message: String },

    #[error("Merge failed: {message}")]
    MergeFailed { message: String },

    #[error("Probe failed: {message}")]
    ProbeFailed { message: String },

    #[error("Source runs {actual_secs:.0}s, below the {minimum_secs}s minimum")]
    BelowMinimumDuration { actual_secs: f64, minimum_secs: u64 },

    #[error("Composition stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },

    #[error("FFmpeg command failed: {message}")]
    FfmpegFailed {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MediaError {
    /// Create a stream-unavailable error.
    pub fn stream_unavailable(message: impl Into<String>) -> Self {
        Self::StreamUnavailable {
            message: message.into(),
        }
    }

    /// Create a download failure error.
    pub fn download_failed(message: impl Into<String>) -> Self {
        Self::DownloadFailed {
            message: message.into(),
        }
    }

    /// Create a merge failure error.
    pub fn merge_failed(message: impl Into<String>) -> Self {
        Self::MergeFailed {
            message: message.into(),
        }
    }

    /// Create a probe failure error.
    pub fn probe_failed(message: impl Into<String>) -> Self {
        Self::ProbeFailed {
            message: message.into(),
        }
    }

    /// Wrap a stage failure with the stage name for context.
    pub fn stage_failed(stage: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::StageFailed {
            stage: stage.into(),
            message: source.to_string(),
        }
    }

    /// Create an FFmpeg failure error.
    pub fn ffmpeg_failed(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::FfmpegFailed {
            message: message.into(),
            stderr,
            exit_code,
        }
    }
}
