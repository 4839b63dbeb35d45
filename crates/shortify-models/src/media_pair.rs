//! Downloaded media locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local files produced by fetching one candidate.
///
/// The paths live under the downloads directory and exist only as long
/// as the caller keeps them; nothing here deletes files. When
/// `already_merged` is true the merged container was found on disk and
/// no download or merge was performed for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPair {
    /// Video-only stream file.
    pub video_path: PathBuf,
    /// Audio-only stream file.
    pub audio_path: PathBuf,
    /// Merged single-container file (input to composition).
    pub merged_path: PathBuf,
    /// True when the merged file pre-existed and all work was skipped.
    pub already_merged: bool,
}
