//! Composition configuration for the vertical short.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::encoding::EncodingConfig;

/// Default canvas width for the vertical short.
pub const DEFAULT_CANVAS_WIDTH: u32 = 720;
/// Default canvas height for the vertical short.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1280;
/// Default length of the main clip in seconds.
pub const DEFAULT_CLIP_SECS: f64 = 55.0;

/// Default banner line width in characters.
pub const DEFAULT_LINE_WIDTH: usize = 40;
/// Default maximum banner lines before truncation.
pub const DEFAULT_MAX_LINES: usize = 3;
/// Default banner font size.
pub const DEFAULT_FONT_SIZE: u32 = 50;

/// Default watermark height in pixels.
pub const DEFAULT_WATERMARK_HEIGHT: u32 = 100;
/// Default watermark opacity.
pub const DEFAULT_WATERMARK_OPACITY: f32 = 0.5;

/// Title banner layout and drawing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Maximum characters per wrapped line.
    pub line_width: usize,
    /// Maximum lines before the title is truncated with an ellipsis.
    pub max_lines: usize,
    /// Blank lines above the title inside the banner box.
    pub top_padding: usize,
    /// Blank lines below the title inside the banner box.
    pub bottom_padding: usize,
    /// Font file used by the text-drawing filter.
    pub font_file: PathBuf,
    /// Font size in points.
    pub font_size: u32,
    /// Text color.
    pub font_color: String,
    /// Banner box color, including alpha (e.g. "black@0.6").
    pub box_color: String,
    /// Banner box border width in pixels.
    pub box_border: u32,
}

impl BannerConfig {
    /// Create a banner config for a font file with default layout values.
    pub fn new(font_file: impl Into<PathBuf>) -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            max_lines: DEFAULT_MAX_LINES,
            top_padding: 1,
            bottom_padding: 1,
            font_file: font_file.into(),
            font_size: DEFAULT_FONT_SIZE,
            font_color: "white".to_string(),
            box_color: "black@0.6".to_string(),
            box_border: 10,
        }
    }
}

/// Watermark overlay configuration.
///
/// The image is scaled to a fixed height and anchored bottom-right,
/// semi-transparent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// Path to the watermark image (PNG with transparency).
    pub image_path: PathBuf,
    /// Height the image is scaled to, in pixels.
    pub height: u32,
    /// Opacity (0.0 to 1.0).
    pub opacity: f32,
}

impl WatermarkConfig {
    /// Create a watermark config with default size and opacity.
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            height: DEFAULT_WATERMARK_HEIGHT,
            opacity: DEFAULT_WATERMARK_OPACITY,
        }
    }

    /// Set the scaled height.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the opacity (0.0 = invisible, 1.0 = fully opaque).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Everything the compositor needs besides the input video and title.
///
/// Configuration, not mutable state: built once at startup from the
/// environment and passed into the compositor constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionSpec {
    /// Target canvas width.
    pub canvas_width: u32,
    /// Target canvas height.
    pub canvas_height: u32,
    /// Main clip duration in seconds.
    pub duration_secs: f64,
    /// Title banner configuration.
    pub banner: BannerConfig,
    /// Optional watermark overlay.
    pub watermark: Option<WatermarkConfig>,
    /// Closing clip appended after the main composed content.
    pub outro_path: PathBuf,
    /// Encoding policy shared by all stages.
    pub encoding: EncodingConfig,
}

impl CompositionSpec {
    /// Create a spec with default canvas, duration, and encoding.
    pub fn new(outro_path: impl Into<PathBuf>, banner: BannerConfig) -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            duration_secs: DEFAULT_CLIP_SECS,
            banner,
            watermark: None,
            outro_path: outro_path.into(),
            encoding: EncodingConfig::default(),
        }
    }

    /// Set the canvas dimensions.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the main clip duration.
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Attach a watermark overlay.
    pub fn with_watermark(mut self, watermark: WatermarkConfig) -> Self {
        self.watermark = Some(watermark);
        self
    }

    /// Canvas dimensions as a pair.
    pub fn canvas(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = CompositionSpec::new("outro.mp4", BannerConfig::new("font.ttf"));
        assert_eq!(spec.canvas(), (720, 1280));
        assert!((spec.duration_secs - 55.0).abs() < f64::EPSILON);
        assert!(spec.watermark.is_none());
    }

    #[test]
    fn test_watermark_opacity_clamping() {
        let wm = WatermarkConfig::new("logo.png").with_opacity(1.5);
        assert!((wm.opacity - 1.0).abs() < 0.01);

        let wm = WatermarkConfig::new("logo.png").with_opacity(-0.5);
        assert!(wm.opacity.abs() < 0.01);
    }

    #[test]
    fn test_banner_defaults() {
        let banner = BannerConfig::new("font.ttf");
        assert_eq!(banner.line_width, 40);
        assert_eq!(banner.max_lines, 3);
        assert_eq!(banner.font_size, 50);
    }
}
