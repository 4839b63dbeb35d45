//! Candidate videos produced by the channel query.

use serde::{Deserialize, Serialize};

/// Build the canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// A video identified by the channel query, eligible for download
/// and composition.
///
/// Candidates are immutable once returned. The list they arrive in is
/// shuffled, so there is no ordering guarantee; uniqueness of
/// `video_id` within one query is implied by the API but not enforced
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// YouTube video id (11 characters).
    pub video_id: String,
    /// Video title as reported by the API snippet.
    pub title: String,
    /// Canonical watch URL.
    pub url: String,
}

impl Candidate {
    /// Create a candidate from an id and title, deriving the watch URL.
    pub fn new(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        let video_id = video_id.into();
        let url = watch_url(&video_id);
        Self {
            video_id,
            title: title.into(),
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_candidate_new_derives_url() {
        let c = Candidate::new("abc123def45", "Some title");
        assert_eq!(c.video_id, "abc123def45");
        assert_eq!(c.title, "Some title");
        assert_eq!(c.url, "https://www.youtube.com/watch?v=abc123def45");
    }
}
