//! Filename sanitization for title-derived paths.

/// Strip everything except word characters from a title.
///
/// Keeps alphanumerics and underscores; drops spaces, punctuation, and
/// path separators. The result is safe to embed in paths and FFmpeg
/// filter arguments without quoting. Two different titles can sanitize
/// to the same string, in which case they share cache paths; the
/// collision is accepted and unhandled.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_spaces() {
        assert_eq!(
            sanitize_title("24 Modern Ui: Python, PySide6!"),
            "24ModernUiPythonPySide6"
        );
    }

    #[test]
    fn test_keeps_underscores() {
        assert_eq!(sanitize_title("snake_case_title"), "snake_case_title");
    }

    #[test]
    fn test_strips_path_separators() {
        assert_eq!(sanitize_title("a/b\\c"), "abc");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(sanitize_title("Vidéo à voir"), "Vidéoàvoir");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(sanitize_title(""), "");
        assert_eq!(sanitize_title("!!!***"), "");
    }
}
