//! Run loop: pick a candidate, fetch, compose, stop on first success.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use shortify_media::{Compositor, FfmpegBackend, Fetcher, MediaError, MediaResult};
use shortify_models::{Candidate, MediaPair};
use shortify_source::{ChannelClient, SourceResult};

use crate::error::{RunError, RunResult};

/// Queries a channel for a randomized candidate list.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn list_candidates(&self, max_results: u32) -> SourceResult<Vec<Candidate>>;
}

/// Resolves a candidate to local merged media.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    async fn fetch(&self, candidate: &Candidate) -> MediaResult<MediaPair>;
}

/// Produces the finished short for one input video.
#[async_trait]
pub trait ShortCompositor: Send + Sync {
    async fn compose(&self, input: &Path, title: &str) -> MediaResult<PathBuf>;
}

#[async_trait]
impl VideoSource for ChannelClient {
    async fn list_candidates(&self, max_results: u32) -> SourceResult<Vec<Candidate>> {
        ChannelClient::list_candidates(self, max_results).await
    }
}

#[async_trait]
impl MediaFetcher for Fetcher {
    async fn fetch(&self, candidate: &Candidate) -> MediaResult<MediaPair> {
        Fetcher::fetch(self, candidate).await
    }
}

#[async_trait]
impl ShortCompositor for Compositor<FfmpegBackend> {
    async fn compose(&self, input: &Path, title: &str) -> MediaResult<PathBuf> {
        Compositor::compose(self, input, title).await
    }
}

/// Ties source, fetcher, and compositor together for one run.
pub struct Orchestrator<S, F, C> {
    source: S,
    fetcher: F,
    compositor: C,
    max_trials: u32,
    max_results: u32,
}

impl<S, F, C> Orchestrator<S, F, C>
where
    S: VideoSource,
    F: MediaFetcher,
    C: ShortCompositor,
{
    /// Create an orchestrator with a trial budget.
    pub fn new(source: S, fetcher: F, compositor: C, max_trials: u32, max_results: u32) -> Self {
        Self {
            source,
            fetcher,
            compositor,
            max_trials,
            max_results,
        }
    }

    /// Run one candidate-list query and try candidates until one
    /// produces a short or the trial budget is exhausted.
    ///
    /// A candidate below the minimum duration or without suitable
    /// streams counts as a spent trial; the loop moves to the next
    /// candidate rather than retrying the same one.
    pub async fn run(&self) -> RunResult<PathBuf> {
        let candidates = match self.source.list_candidates(self.max_results).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Candidate query failed: {e}");
                return Err(e.into());
            }
        };

        let mut trials = 0u32;
        for candidate in &candidates {
            if trials >= self.max_trials {
                break;
            }
            trials += 1;

            info!(
                trial = trials,
                video_id = %candidate.video_id,
                title = %candidate.title,
                "Trying candidate"
            );

            let media = match self.fetcher.fetch(candidate).await {
                Ok(media) => media,
                Err(e @ MediaError::BelowMinimumDuration { .. }) => {
                    info!(video_id = %candidate.video_id, "Skipping candidate: {e}");
                    continue;
                }
                Err(e) => {
                    warn!(video_id = %candidate.video_id, "Fetch failed: {e}");
                    continue;
                }
            };

            match self
                .compositor
                .compose(&media.merged_path, &candidate.title)
                .await
            {
                Ok(output) => {
                    info!(output = %output.display(), "Short ready");
                    return Ok(output);
                }
                Err(e) => {
                    error!(video_id = %candidate.video_id, "Composition failed: {e}");
                    continue;
                }
            }
        }

        error!(trials, "All trials exhausted without a finished short");
        Err(RunError::TrialsExhausted { trials })
    }
}
