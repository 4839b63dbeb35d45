//! Candidate fetching: stream downloads and container merge.
//!
//! Downloads the best adaptive video-only and audio-only streams with
//! yt-dlp, then merges them into one container with FFmpeg (video
//! copied, audio re-encoded to AAC). Files already on disk are treated
//! as cache hits and skipped; there is no checksum or completeness
//! validation, so an interrupted prior download masquerades as
//! complete. Best-effort by design.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

use shortify_models::{sanitize_title, Candidate, MediaPair};

use crate::command::{check_ffmpeg, check_ytdlp, FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Minimum source duration for a short re-edit, in seconds.
pub const MIN_SHORT_SOURCE_SECS: u64 = 120;

/// Highest-resolution mp4 video-only stream.
const VIDEO_FORMAT: &str = "bestvideo[ext=mp4]";
/// Compatible m4a audio-only stream.
const AUDIO_FORMAT: &str = "bestaudio[ext=m4a]";

/// Fetch policy knobs.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    /// Reject candidates shorter than this many seconds before
    /// downloading anything. `None` disables the check.
    pub min_duration_secs: Option<u64>,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            min_duration_secs: Some(MIN_SHORT_SOURCE_SECS),
        }
    }
}

impl FetchPolicy {
    /// Whether a source of the given duration passes the minimum.
    /// The boundary is inclusive: exactly the minimum is accepted.
    pub fn accepts(&self, duration_secs: f64) -> bool {
        match self.min_duration_secs {
            None => true,
            Some(min) => duration_secs >= min as f64,
        }
    }
}

/// Resolves candidates to merged local media files.
#[derive(Debug, Clone)]
pub struct Fetcher {
    downloads_dir: PathBuf,
    policy: FetchPolicy,
}

impl Fetcher {
    /// Create a fetcher writing into `downloads_dir`.
    pub fn new(downloads_dir: impl Into<PathBuf>, policy: FetchPolicy) -> Self {
        Self {
            downloads_dir: downloads_dir.into(),
            policy,
        }
    }

    /// Expected local paths for a candidate, derived from its
    /// sanitized title.
    pub fn paths_for(&self, candidate: &Candidate) -> MediaPair {
        let stem = sanitize_title(&candidate.title);
        MediaPair {
            video_path: self.downloads_dir.join(format!("{stem}_video.mp4")),
            audio_path: self.downloads_dir.join(format!("{stem}_audio.mp4")),
            merged_path: self.downloads_dir.join(format!("{stem}.mp4")),
            already_merged: false,
        }
    }

    /// Resolve a candidate to a merged local media file.
    ///
    /// Skips the download entirely when the merged container is already
    /// on disk, and skips individual stream downloads when their files
    /// exist. Candidates below the policy's minimum duration are
    /// rejected before any download.
    pub async fn fetch(&self, candidate: &Candidate) -> MediaResult<MediaPair> {
        let mut pair = self.paths_for(candidate);

        if pair.merged_path.exists() {
            info!(
                video_id = %candidate.video_id,
                path = %pair.merged_path.display(),
                "Merged file already on disk, skipping fetch"
            );
            pair.already_merged = true;
            return Ok(pair);
        }

        check_ytdlp()?;
        tokio::fs::create_dir_all(&self.downloads_dir).await?;

        if let Some(min) = self.policy.min_duration_secs {
            let duration = self.remote_duration(&candidate.url).await?;
            if !self.policy.accepts(duration) {
                return Err(MediaError::BelowMinimumDuration {
                    actual_secs: duration,
                    minimum_secs: min,
                });
            }
        }

        self.download_stream(&candidate.url, VIDEO_FORMAT, &pair.video_path)
            .await?;
        self.download_stream(&candidate.url, AUDIO_FORMAT, &pair.audio_path)
            .await?;

        self.merge(&pair.video_path, &pair.audio_path, &pair.merged_path)
            .await?;

        info!(
            video_id = %candidate.video_id,
            output = %pair.merged_path.display(),
            "Fetched and merged candidate"
        );

        Ok(pair)
    }

    /// Probe the remote duration without downloading media.
    async fn remote_duration(&self, url: &str) -> MediaResult<f64> {
        let output = Command::new("yt-dlp")
            .args(["--print", "duration", "--skip-download", "--no-warnings", url])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MediaError::probe_failed(format!(
                "yt-dlp could not report duration: {}",
                stderr.lines().last().unwrap_or("unknown error")
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout.trim().parse::<f64>().map_err(|_| {
            MediaError::probe_failed(format!("unparsable duration {:?}", stdout.trim()))
        })
    }

    /// Download one adaptive stream to `path`, skipping if it exists.
    async fn download_stream(&self, url: &str, format: &str, path: &Path) -> MediaResult<()> {
        if path.exists() {
            debug!(path = %path.display(), "Stream already on disk, skipping download");
            return Ok(());
        }

        info!(url, format, output = %path.display(), "Downloading stream");

        let output = Command::new("yt-dlp")
            .args(["-f", format, "-o"])
            .arg(path)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.lines().last().unwrap_or("unknown error").to_string();
            debug!("yt-dlp stderr: {}", stderr);

            if stderr.contains("Requested format is not available") {
                return Err(MediaError::stream_unavailable(format!(
                    "{format}: {message}"
                )));
            }
            return Err(MediaError::download_failed(message));
        }

        if !path.exists() {
            return Err(MediaError::download_failed("Output file not created"));
        }

        Ok(())
    }

    /// Merge the video and audio streams into one container, copying
    /// the video codec and re-encoding audio to AAC.
    async fn merge(&self, video: &Path, audio: &Path, merged: &Path) -> MediaResult<()> {
        check_ffmpeg()?;

        let cmd = FfmpegCommand::new(video, merged)
            .second_input(audio)
            .output_args(["-c:v", "copy", "-c:a", "aac"]);

        FfmpegRunner::new().run(&cmd).await.map_err(|e| {
            warn!(output = %merged.display(), "Merge failed");
            MediaError::merge_failed(e.to_string())
        })?;

        info!(output = %merged.display(), "Merged video and audio");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_boundary_inclusive() {
        let policy = FetchPolicy::default();
        assert!(policy.accepts(120.0));
        assert!(policy.accepts(121.0));
        assert!(!policy.accepts(119.0));
    }

    #[test]
    fn test_policy_disabled() {
        let policy = FetchPolicy {
            min_duration_secs: None,
        };
        assert!(policy.accepts(0.0));
        assert!(policy.accepts(1.0));
    }

    #[test]
    fn test_paths_derived_from_sanitized_title() {
        let fetcher = Fetcher::new("/tmp/dl", FetchPolicy::default());
        let candidate = Candidate::new("abc123def45", "My Video: Part 2!");
        let pair = fetcher.paths_for(&candidate);

        assert_eq!(
            pair.video_path,
            PathBuf::from("/tmp/dl/MyVideoPart2_video.mp4")
        );
        assert_eq!(
            pair.audio_path,
            PathBuf::from("/tmp/dl/MyVideoPart2_audio.mp4")
        );
        assert_eq!(pair.merged_path, PathBuf::from("/tmp/dl/MyVideoPart2.mp4"));
        assert!(!pair.already_merged);
    }

    #[tokio::test]
    async fn test_fetch_returns_cache_hit_without_tools() {
        // A pre-existing merged file must short-circuit before the
        // yt-dlp availability check, so this passes even where the
        // tool is not installed.
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(dir.path(), FetchPolicy::default());
        let candidate = Candidate::new("abc123def45", "Cached");

        tokio::fs::write(dir.path().join("Cached.mp4"), b"container")
            .await
            .unwrap();

        let pair = fetcher.fetch(&candidate).await.unwrap();
        assert!(pair.already_merged);
        assert_eq!(pair.merged_path, dir.path().join("Cached.mp4"));
    }
}
