//! Title word-wrap for the banner overlay.

use crate::composition::BannerConfig;

/// Ellipsis marker appended when the title is truncated.
pub const ELLIPSIS: &str = "...";

/// Result of wrapping a title for the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedTitle {
    /// Content lines, at most `max_lines`, each at most `line_width`
    /// characters including the ellipsis marker.
    pub lines: Vec<String>,
    /// True when content was dropped and the last line carries the
    /// ellipsis marker.
    pub truncated: bool,
}

/// Word-wrap `text` to `line_width` characters, capped at `max_lines`.
///
/// Words longer than a line are hard-broken. When the wrapped text
/// exceeds `max_lines`, the surplus lines are dropped and the last kept
/// line is re-cut so that it still fits `line_width` with the ellipsis
/// marker appended.
pub fn wrap(text: &str, line_width: usize, max_lines: usize) -> WrappedTitle {
    let line_width = line_width.max(1);
    let mut lines = wrap_words(text, line_width);

    let truncated = lines.len() > max_lines;
    if truncated {
        lines.truncate(max_lines.max(1));
        let last = lines.last_mut().unwrap();
        let keep = line_width.saturating_sub(ELLIPSIS.len());
        if last.chars().count() > keep {
            *last = last.chars().take(keep).collect::<String>().trim_end().to_string();
        }
        last.push_str(ELLIPSIS);
    }

    WrappedTitle { lines, truncated }
}

/// Banner text for the drawtext filter: wrapped title plus blank
/// padding lines above and below, newline-joined.
pub fn banner_text(title: &str, banner: &BannerConfig) -> String {
    let wrapped = wrap(title, banner.line_width, banner.max_lines);

    let mut padded: Vec<String> = Vec::with_capacity(
        banner.top_padding + wrapped.lines.len() + banner.bottom_padding,
    );
    padded.extend(std::iter::repeat(String::new()).take(banner.top_padding));
    padded.extend(wrapped.lines);
    padded.extend(std::iter::repeat(String::new()).take(banner.bottom_padding));

    padded.join("\n")
}

/// Greedy word wrap; words longer than `width` are hard-broken.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let word_len = word.chars().count();
            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
                break;
            }

            if current_len > 0 {
                // Word does not fit on this line; start a fresh one.
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            // Word longer than a whole line: hard-break it.
            let split_at = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
            if word.is_empty() {
                break;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> BannerConfig {
        BannerConfig::new("font.ttf")
    }

    #[test]
    fn test_short_title_single_line() {
        let wrapped = wrap("Short title", 40, 3);
        assert_eq!(wrapped.lines, vec!["Short title"]);
        assert!(!wrapped.truncated);
    }

    #[test]
    fn test_wrap_respects_line_width() {
        let wrapped = wrap("one two three four five six seven eight", 10, 10);
        assert!(!wrapped.truncated);
        for line in &wrapped.lines {
            assert!(line.chars().count() <= 10, "line too long: {:?}", line);
        }
        // No content lost when nothing is truncated.
        let rejoined = wrapped.lines.join(" ");
        assert_eq!(rejoined, "one two three four five six seven eight");
    }

    #[test]
    fn test_never_exceeds_max_lines() {
        let many_words = "word ".repeat(50);
        let giant_word = "supercalifragilisticexpialidocious".repeat(4);
        for text in ["a", many_words.as_str(), giant_word.as_str()] {
            let wrapped = wrap(text, 12, 3);
            assert!(wrapped.lines.len() <= 3);
        }
    }

    #[test]
    fn test_ellipsis_iff_truncated() {
        let kept = wrap("fits on one line", 40, 3);
        assert!(!kept.truncated);
        assert!(!kept.lines.last().unwrap().ends_with(ELLIPSIS));

        let cut = wrap(&"word ".repeat(40), 10, 3);
        assert!(cut.truncated);
        assert!(cut.lines.last().unwrap().ends_with(ELLIPSIS));
    }

    #[test]
    fn test_two_hundred_chars_width_forty_three_lines() {
        // 25 eight-character words minus trailing space = 224 chars of
        // input, comfortably past three 40-char lines.
        let text = "abcdefgh ".repeat(25);
        let wrapped = wrap(text.trim_end(), 40, 3);

        assert_eq!(wrapped.lines.len(), 3);
        assert!(wrapped.truncated);
        assert!(wrapped.lines[2].ends_with(ELLIPSIS));

        let total: usize = wrapped.lines.iter().map(|l| l.chars().count()).sum();
        assert!(total <= 3 * 40, "wrapped content too long: {}", total);
    }

    #[test]
    fn test_long_word_hard_break() {
        let wrapped = wrap("abcdefghijklmnop", 5, 10);
        assert_eq!(wrapped.lines, vec!["abcde", "fghij", "klmno", "p"]);
    }

    #[test]
    fn test_banner_text_padding_lines() {
        let mut cfg = banner();
        cfg.top_padding = 2;
        cfg.bottom_padding = 1;
        let text = banner_text("hello world", &cfg);
        assert_eq!(text, "\n\nhello world\n");
    }

    #[test]
    fn test_banner_text_multiline() {
        let cfg = banner();
        let text = banner_text(&"word ".repeat(40), &cfg);
        let lines: Vec<&str> = text.split('\n').collect();
        // 1 top pad + 3 content + 1 bottom pad
        assert_eq!(lines.len(), 5);
        assert!(lines[0].is_empty());
        assert!(lines[4].is_empty());
    }
}
