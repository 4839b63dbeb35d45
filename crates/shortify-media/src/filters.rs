//! FFmpeg filter-string builders for the composition stages.

use shortify_models::{BannerConfig, WatermarkConfig};

use crate::layout::CoverLayout;

/// Blur strength for the background layer.
pub const BACKGROUND_BLUR: &str = "boxblur=10:10";

/// Watermark offset from the bottom-right corner, in pixels.
pub const WATERMARK_MARGIN: u32 = 20;

/// Escape a value embedded in a filter argument.
///
/// Covers the characters FFmpeg's filter graph parser treats specially
/// inside quoted arguments, plus `%` which drawtext expands.
pub fn escape_filter_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace(':', "\\:")
        .replace('%', "\\%")
}

/// Background stage filter: cover-scale, center-crop, blur, pad to the
/// exact canvas.
pub fn background_filter(layout: &CoverLayout, canvas: (u32, u32)) -> String {
    let (sw, sh) = layout.scaled;
    let (crw, crh) = layout.crop;
    let (cw, ch) = canvas;
    format!(
        "scale={sw}:{sh},crop={crw}:{crh},{BACKGROUND_BLUR},pad={cw}:{ch}:(ow-iw)/2:(oh-ih)/2"
    )
}

/// Foreground stage filter: plain fit-within scale, no cropping.
pub fn foreground_filter(fitted: (u32, u32)) -> String {
    format!("scale={}:{}", fitted.0, fitted.1)
}

/// Outro stage filter: fit-within scale plus centered pad to the canvas.
pub fn outro_filter(fitted: (u32, u32), canvas: (u32, u32)) -> String {
    format!(
        "scale={}:{},pad={}:{}:(ow-iw)/2:(oh-ih)/2",
        fitted.0, fitted.1, canvas.0, canvas.1
    )
}

/// Banner drawtext filter: fixed font, semi-opaque box, centered
/// horizontally, anchored near the top of the canvas.
pub fn drawtext_filter(banner_text: &str, banner: &BannerConfig) -> String {
    format!(
        "drawtext=text='{}':fontfile='{}':fontcolor={}:fontsize={}:box=1:boxcolor={}:boxborderw={}:x=(w-text_w)/2:y=10",
        escape_filter_text(banner_text),
        escape_filter_text(&banner.font_file.to_string_lossy()),
        banner.font_color,
        banner.font_size,
        banner.box_color,
        banner.box_border,
    )
}

/// Watermark chain: the image loaded through the `movie` source filter,
/// scaled to a fixed height, faded via the alpha channel, overlaid
/// bottom-right.
fn watermark_chain(watermark: &WatermarkConfig, input_label: &str) -> String {
    format!(
        "movie='{}',scale=-2:{},format=rgba,colorchannelmixer=aa={:.2}[wm];[{}][wm]overlay=W-w-{}:H-h-{}",
        escape_filter_text(&watermark.image_path.to_string_lossy()),
        watermark.height,
        watermark.opacity,
        input_label,
        WATERMARK_MARGIN,
        WATERMARK_MARGIN,
    )
}

/// Full composition filter graph: foreground overlaid centered on the
/// background, the banner drawn on top, and the watermark (when
/// configured) composited last.
///
/// Input 0 is the background clip, input 1 the foreground clip.
pub fn compose_filter(
    banner_text: &str,
    banner: &BannerConfig,
    watermark: Option<&WatermarkConfig>,
) -> String {
    let main = format!(
        "[0:v][1:v]overlay=(W-w)/2:(H-h)/2,{}",
        drawtext_filter(banner_text, banner)
    );

    match watermark {
        Some(wm) => format!("{main}[main];{}", watermark_chain(wm, "main")),
        None => main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::cover_crop;

    fn banner() -> BannerConfig {
        BannerConfig::new("Fonts/Luciole-Regular.ttf")
    }

    #[test]
    fn test_escape_filter_text() {
        assert_eq!(escape_filter_text("a:b"), "a\\:b");
        assert_eq!(escape_filter_text("it's"), "it\\'s");
        assert_eq!(escape_filter_text("50%"), "50\\%");
        assert_eq!(escape_filter_text("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_background_filter_shape() {
        let layout = cover_crop((1920, 1080), (720, 1280));
        let filter = background_filter(&layout, (720, 1280));
        assert_eq!(
            filter,
            "scale=2274:1280,crop=720:1280,boxblur=10:10,pad=720:1280:(ow-iw)/2:(oh-ih)/2"
        );
    }

    #[test]
    fn test_drawtext_contains_banner_settings() {
        let filter = drawtext_filter("Hello\nWorld", &banner());
        assert!(filter.contains("fontcolor=white"));
        assert!(filter.contains("fontsize=50"));
        assert!(filter.contains("boxcolor=black@0.6"));
        assert!(filter.contains("x=(w-text_w)/2"));
        assert!(filter.contains("y=10"));
    }

    #[test]
    fn test_compose_filter_without_watermark() {
        let filter = compose_filter("Title", &banner(), None);
        assert!(filter.starts_with("[0:v][1:v]overlay=(W-w)/2:(H-h)/2,drawtext="));
        assert!(!filter.contains("movie="));
        assert!(!filter.contains("[main]"));
    }

    #[test]
    fn test_compose_filter_with_watermark() {
        let wm = WatermarkConfig::new("logo.png");
        let filter = compose_filter("Title", &banner(), Some(&wm));
        assert!(filter.contains("[main];movie='logo.png'"));
        assert!(filter.contains("scale=-2:100"));
        assert!(filter.contains("colorchannelmixer=aa=0.50"));
        assert!(filter.contains("overlay=W-w-20:H-h-20"));
    }

    #[test]
    fn test_outro_filter_pads_to_canvas() {
        let filter = outro_filter((720, 404), (720, 1280));
        assert_eq!(filter, "scale=720:404,pad=720:1280:(ow-iw)/2:(oh-ih)/2");
    }
}
