//! Application configuration.

use std::path::PathBuf;

use shortify_media::fetch::FetchPolicy;
use shortify_models::{BannerConfig, CompositionSpec, WatermarkConfig};

use crate::error::{RunError, RunResult};

/// Default work directory.
const DEFAULT_WORK_DIR: &str = "shortify-data";
/// Default overall trial budget per run.
const DEFAULT_MAX_TRIALS: u32 = 5;
/// Default page size for the channel query.
const DEFAULT_MAX_RESULTS: u32 = 50;

/// Application configuration, loaded once at process start and passed
/// into each component's constructor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// YouTube Data API key.
    pub api_key: String,
    /// Target channel identifier.
    pub channel_id: String,
    /// Root directory for downloads, stage files, shorts, and the log.
    pub work_dir: PathBuf,
    /// Overall trial budget per run.
    pub max_trials: u32,
    /// Page size for the channel query (capped at 50 by the API).
    pub max_results: u32,
    /// Minimum source duration; `None` disables the pre-filter.
    pub min_duration_secs: Option<u64>,
    /// Main clip length in seconds.
    pub clip_secs: f64,
    /// Canvas dimensions.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Outro clip path.
    pub outro_path: PathBuf,
    /// Banner font file.
    pub font_path: PathBuf,
    /// Watermark image; when unset, a downloaded channel logo is used
    /// if available.
    pub watermark_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `YOUTUBE_API_KEY` and `CHANNEL_ID_YOUTUBE` are required;
    /// everything else has defaults.
    pub fn from_env() -> RunResult<Self> {
        let api_key = required_env("YOUTUBE_API_KEY")?;
        let channel_id = required_env("CHANNEL_ID_YOUTUBE")?;

        let (canvas_width, canvas_height) = match std::env::var("SHORTIFY_CANVAS") {
            Ok(s) => parse_canvas(&s)?,
            Err(_) => (
                shortify_models::composition::DEFAULT_CANVAS_WIDTH,
                shortify_models::composition::DEFAULT_CANVAS_HEIGHT,
            ),
        };

        let min_duration_secs = match env_parse::<u64>("SHORTIFY_MIN_DURATION_SECS") {
            Some(0) => None,
            Some(secs) => Some(secs),
            None => Some(shortify_media::MIN_SHORT_SOURCE_SECS),
        };

        Ok(Self {
            api_key,
            channel_id,
            work_dir: std::env::var("SHORTIFY_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORK_DIR)),
            max_trials: env_parse("SHORTIFY_MAX_TRIALS").unwrap_or(DEFAULT_MAX_TRIALS),
            max_results: env_parse("SHORTIFY_MAX_RESULTS").unwrap_or(DEFAULT_MAX_RESULTS),
            min_duration_secs,
            clip_secs: env_parse("SHORTIFY_CLIP_SECS")
                .unwrap_or(shortify_models::composition::DEFAULT_CLIP_SECS),
            canvas_width,
            canvas_height,
            outro_path: std::env::var("SHORTIFY_OUTRO")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets/outro.mp4")),
            font_path: std::env::var("SHORTIFY_FONT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets/fonts/Luciole-Regular.ttf")),
            watermark_path: std::env::var("SHORTIFY_WATERMARK").ok().map(PathBuf::from),
        })
    }

    /// Raw stream downloads.
    pub fn downloads_dir(&self) -> PathBuf {
        self.work_dir.join("downloads")
    }

    /// Default location for the downloaded channel logo.
    pub fn channel_logo_path(&self) -> PathBuf {
        self.work_dir.join("channel_logo.png")
    }

    /// Append-only run log.
    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join("shortify.log")
    }

    /// Fetch policy derived from the duration knob.
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            min_duration_secs: self.min_duration_secs,
        }
    }

    /// Composition spec for one run; `watermark` is the resolved
    /// watermark image, if any.
    pub fn composition_spec(&self, watermark: Option<PathBuf>) -> CompositionSpec {
        let mut spec = CompositionSpec::new(&self.outro_path, BannerConfig::new(&self.font_path))
            .with_canvas(self.canvas_width, self.canvas_height)
            .with_duration(self.clip_secs);
        if let Some(image) = watermark {
            spec = spec.with_watermark(WatermarkConfig::new(image));
        }
        spec
    }
}

fn required_env(name: &str) -> RunResult<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RunError::config(format!("{name} is not set")))
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

/// Parse a `WIDTHxHEIGHT` canvas string.
fn parse_canvas(s: &str) -> RunResult<(u32, u32)> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| RunError::config(format!("invalid canvas {s:?}, expected WIDTHxHEIGHT")))?;
    let w = w
        .parse()
        .map_err(|_| RunError::config(format!("invalid canvas width {w:?}")))?;
    let h = h
        .parse()
        .map_err(|_| RunError::config(format!("invalid canvas height {h:?}")))?;
    Ok((w, h))
}
