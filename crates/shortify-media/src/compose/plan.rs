//! Per-stage render plans.
//!
//! The compositor computes all geometry and filter strings up front;
//! a plan carries everything a backend needs to run one external
//! transcode operation.

use std::path::PathBuf;

use shortify_models::EncodingConfig;

/// Background stage: cover-scale, crop, blur, pad, silence, truncate.
#[derive(Debug, Clone)]
pub struct BackgroundPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: String,
    pub duration_secs: f64,
    pub encoding: EncodingConfig,
}

/// Foreground stage: fit-within scale, truncate.
#[derive(Debug, Clone)]
pub struct ForegroundPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: String,
    pub duration_secs: f64,
    pub encoding: EncodingConfig,
}

/// Layer composition stage: overlay + banner (+ watermark).
#[derive(Debug, Clone)]
pub struct ComposePlan {
    pub background: PathBuf,
    pub foreground: PathBuf,
    pub output: PathBuf,
    pub filter_complex: String,
    pub encoding: EncodingConfig,
}

/// Outro normalization stage: fit-within scale + pad at the target
/// frame rate.
#[derive(Debug, Clone)]
pub struct OutroPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filter: String,
    pub encoding: EncodingConfig,
}

/// Export stage: concat main + outro and re-encode at the fixed frame
/// rate and bitrate (layers were composited, so no stream copy).
#[derive(Debug, Clone)]
pub struct ConcatPlan {
    pub main: PathBuf,
    pub outro: PathBuf,
    /// Concat demuxer list file, written by the backend.
    pub list_file: PathBuf,
    pub output: PathBuf,
    pub encoding: EncodingConfig,
}
