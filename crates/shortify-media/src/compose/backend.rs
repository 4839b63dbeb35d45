//! Render backend seam.
//!
//! The compositor owns stage order, caching, and geometry; a backend
//! only executes individual transcode operations. Production uses
//! FFmpeg child processes; tests plug a recording fake.

use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;
use crate::probe::{probe_video, VideoInfo};

use super::plan::{BackgroundPlan, ComposePlan, ConcatPlan, ForegroundPlan, OutroPlan};

/// External transcode operations used by the composition pipeline.
#[async_trait]
pub trait RenderBackend: Send + Sync {
    /// Probe a video for dimensions and duration.
    async fn probe(&self, input: &Path) -> MediaResult<VideoInfo>;

    /// Render the blurred background layer.
    async fn render_background(&self, plan: &BackgroundPlan) -> MediaResult<()>;

    /// Render the aspect-preserved foreground layer.
    async fn render_foreground(&self, plan: &ForegroundPlan) -> MediaResult<()>;

    /// Stack background, foreground, banner, and watermark.
    async fn compose_layers(&self, plan: &ComposePlan) -> MediaResult<()>;

    /// Scale and pad the outro to the canvas.
    async fn normalize_outro(&self, plan: &OutroPlan) -> MediaResult<()>;

    /// Concatenate main and outro into the final output.
    async fn export_concat(&self, plan: &ConcatPlan) -> MediaResult<()>;
}

/// Production backend invoking FFmpeg/FFprobe child processes.
#[derive(Debug, Clone, Default)]
pub struct FfmpegBackend;

impl FfmpegBackend {
    /// Create a new FFmpeg backend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RenderBackend for FfmpegBackend {
    async fn probe(&self, input: &Path) -> MediaResult<VideoInfo> {
        probe_video(input).await
    }

    async fn render_background(&self, plan: &BackgroundPlan) -> MediaResult<()> {
        let cmd = FfmpegCommand::new(&plan.input, &plan.output)
            .video_filter(&plan.filter)
            .output_args(plan.encoding.video_args())
            .no_audio()
            .duration(plan.duration_secs);

        FfmpegRunner::new().run(&cmd).await?;
        info!(output = %plan.output.display(), "Background layer rendered");
        Ok(())
    }

    async fn render_foreground(&self, plan: &ForegroundPlan) -> MediaResult<()> {
        let cmd = FfmpegCommand::new(&plan.input, &plan.output)
            .video_filter(&plan.filter)
            .output_args(plan.encoding.video_args())
            .output_args(plan.encoding.audio_args())
            .duration(plan.duration_secs);

        FfmpegRunner::new().run(&cmd).await?;
        info!(output = %plan.output.display(), "Foreground layer rendered");
        Ok(())
    }

    async fn compose_layers(&self, plan: &ComposePlan) -> MediaResult<()> {
        // Audio is auto-selected from the foreground input; the
        // background was rendered silent.
        let cmd = FfmpegCommand::new(&plan.background, &plan.output)
            .second_input(&plan.foreground)
            .filter_complex(&plan.filter_complex)
            .output_args(plan.encoding.video_args())
            .output_args(plan.encoding.audio_args());

        FfmpegRunner::new().run(&cmd).await?;
        info!(output = %plan.output.display(), "Layers composed");
        Ok(())
    }

    async fn normalize_outro(&self, plan: &OutroPlan) -> MediaResult<()> {
        let cmd = FfmpegCommand::new(&plan.input, &plan.output)
            .video_filter(&plan.filter)
            .fps(plan.encoding.fps)
            .output_args(plan.encoding.video_args())
            .output_args(plan.encoding.audio_args());

        FfmpegRunner::new().run(&cmd).await?;
        info!(output = %plan.output.display(), "Outro normalized");
        Ok(())
    }

    async fn export_concat(&self, plan: &ConcatPlan) -> MediaResult<()> {
        let list = format!(
            "file '{}'\nfile '{}'\n",
            plan.main.display(),
            plan.outro.display()
        );
        tokio::fs::write(&plan.list_file, list).await?;

        let cmd = FfmpegCommand::new(&plan.list_file, &plan.output)
            .concat_input()
            .fps(plan.encoding.fps)
            .output_args(plan.encoding.video_args())
            .output_args(plan.encoding.audio_args());

        FfmpegRunner::new().run(&cmd).await?;
        info!(output = %plan.output.display(), "Export complete");
        Ok(())
    }
}
