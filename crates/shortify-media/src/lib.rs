//! yt-dlp and FFmpeg glue for fetching and composing shorts.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - FFprobe video information
//! - Candidate fetching (stream download + merge) with a
//!   cache-by-existence policy
//! - The composition stage pipeline behind a pluggable render backend

pub mod command;
pub mod compose;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod layout;
pub mod probe;

pub use command::{check_ffmpeg, check_ffprobe, check_ytdlp, FfmpegCommand, FfmpegRunner};
pub use compose::{Compositor, FfmpegBackend, RenderBackend, StageDirs};
pub use error::{MediaError, MediaResult};
pub use fetch::{FetchPolicy, Fetcher, MIN_SHORT_SOURCE_SECS};
pub use probe::{probe_video, VideoInfo};
