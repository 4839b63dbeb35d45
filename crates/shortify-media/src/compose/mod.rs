//! Composition stage pipeline.
//!
//! A linear pipeline over one input video: blurred background layer,
//! fit-within foreground layer, title banner, optional watermark,
//! outro concatenation, final export. Every stage is gated by an
//! existence check on its output file; the stage files double as the
//! cache, so partial outputs from a failed run are left on disk and a
//! re-run resumes after the last completed stage. Existence is the
//! whole check (no completeness validation) — documented best-effort.

mod backend;
mod plan;

pub use backend::{FfmpegBackend, RenderBackend};
pub use plan::{BackgroundPlan, ComposePlan, ConcatPlan, ForegroundPlan, OutroPlan};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use shortify_models::{sanitize_title, titling, CompositionSpec};

use crate::error::{MediaError, MediaResult};
use crate::filters;
use crate::layout;

/// Directories the pipeline writes into.
#[derive(Debug, Clone)]
pub struct StageDirs {
    /// Intermediate stage outputs (background, foreground, main, outro).
    pub stages: PathBuf,
    /// Finished shorts.
    pub shorts: PathBuf,
}

impl StageDirs {
    /// Conventional layout under a work directory.
    pub fn under(work_dir: impl AsRef<Path>) -> Self {
        let work_dir = work_dir.as_ref();
        Self {
            stages: work_dir.join("stages"),
            shorts: work_dir.join("shorts"),
        }
    }
}

/// Produces the final vertical short for one input video.
pub struct Compositor<B> {
    spec: CompositionSpec,
    dirs: StageDirs,
    backend: B,
}

impl<B: RenderBackend> Compositor<B> {
    /// Create a compositor.
    pub fn new(spec: CompositionSpec, dirs: StageDirs, backend: B) -> Self {
        Self {
            spec,
            dirs,
            backend,
        }
    }

    /// Final output path for a title.
    pub fn output_path(&self, title: &str) -> PathBuf {
        self.dirs
            .shorts
            .join(format!("{}_short_with_outro.mp4", sanitize_title(title)))
    }

    /// Run the full pipeline for `input`, returning the finished short.
    ///
    /// Stages whose outputs already exist are skipped; when the final
    /// output exists the call returns it without any backend
    /// invocation.
    pub async fn compose(&self, input: &Path, title: &str) -> MediaResult<PathBuf> {
        let stem = sanitize_title(title);
        let final_path = self.output_path(title);

        if final_path.exists() {
            info!(
                output = %final_path.display(),
                "Final short already on disk, skipping composition"
            );
            return Ok(final_path);
        }

        tokio::fs::create_dir_all(&self.dirs.stages).await?;
        tokio::fs::create_dir_all(&self.dirs.shorts).await?;

        let canvas = self.spec.canvas();
        let encoding = self.spec.encoding.clone();

        let bg_path = self.dirs.stages.join(format!("{stem}_bg.mp4"));
        let fg_path = self.dirs.stages.join(format!("{stem}_fg.mp4"));
        let main_path = self.dirs.stages.join(format!("{stem}_main.mp4"));
        let outro_path = self.dirs.stages.join(format!("{stem}_outro.mp4"));

        // Background and foreground both need the source dimensions;
        // probe only when at least one of them is missing.
        if !bg_path.exists() || !fg_path.exists() {
            let source = self
                .backend
                .probe(input)
                .await
                .map_err(|e| MediaError::stage_failed("probe", e))?;
            let source_dims = (source.width, source.height);
            debug!(width = source.width, height = source.height, "Probed source");

            if bg_path.exists() {
                debug!(output = %bg_path.display(), "Background exists, skipping");
            } else {
                let cover = layout::cover_crop(source_dims, canvas);
                let plan = BackgroundPlan {
                    input: input.to_path_buf(),
                    output: bg_path.clone(),
                    filter: filters::background_filter(&cover, canvas),
                    duration_secs: self.spec.duration_secs,
                    encoding: encoding.clone(),
                };
                self.backend
                    .render_background(&plan)
                    .await
                    .map_err(|e| MediaError::stage_failed("background", e))?;
            }

            if fg_path.exists() {
                debug!(output = %fg_path.display(), "Foreground exists, skipping");
            } else {
                let fitted = layout::fit_within(source_dims, canvas);
                let plan = ForegroundPlan {
                    input: input.to_path_buf(),
                    output: fg_path.clone(),
                    filter: filters::foreground_filter(fitted),
                    duration_secs: self.spec.duration_secs,
                    encoding: encoding.clone(),
                };
                self.backend
                    .render_foreground(&plan)
                    .await
                    .map_err(|e| MediaError::stage_failed("foreground", e))?;
            }
        }

        if main_path.exists() {
            debug!(output = %main_path.display(), "Composed layers exist, skipping");
        } else {
            let banner_text = titling::banner_text(title, &self.spec.banner);
            let plan = ComposePlan {
                background: bg_path.clone(),
                foreground: fg_path.clone(),
                output: main_path.clone(),
                filter_complex: filters::compose_filter(
                    &banner_text,
                    &self.spec.banner,
                    self.spec.watermark.as_ref(),
                ),
                encoding: encoding.clone(),
            };
            self.backend
                .compose_layers(&plan)
                .await
                .map_err(|e| MediaError::stage_failed("compose", e))?;
        }

        if outro_path.exists() {
            debug!(output = %outro_path.display(), "Normalized outro exists, skipping");
        } else {
            let outro = self
                .backend
                .probe(&self.spec.outro_path)
                .await
                .map_err(|e| MediaError::stage_failed("outro-probe", e))?;
            let fitted = layout::fit_within((outro.width, outro.height), canvas);
            let plan = OutroPlan {
                input: self.spec.outro_path.clone(),
                output: outro_path.clone(),
                filter: filters::outro_filter(fitted, canvas),
                encoding: encoding.clone(),
            };
            self.backend
                .normalize_outro(&plan)
                .await
                .map_err(|e| MediaError::stage_failed("outro", e))?;
        }

        let plan = ConcatPlan {
            main: main_path,
            outro: outro_path,
            list_file: self.dirs.stages.join(format!("{stem}_concat.txt")),
            output: final_path.clone(),
            encoding,
        };
        self.backend
            .export_concat(&plan)
            .await
            .map_err(|e| MediaError::stage_failed("export", e))?;

        info!(output = %final_path.display(), "Short composed");
        Ok(final_path)
    }
}
