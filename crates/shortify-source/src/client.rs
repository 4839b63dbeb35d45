//! Channel query client.

use rand::seq::SliceRandom;
use std::path::Path;
use tracing::{debug, info, warn};

use shortify_models::Candidate;

use crate::error::{SourceError, SourceResult};
use crate::types::{ChannelsResponse, SearchResponse};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// The search endpoint caps page size at 50.
pub const MAX_RESULTS_CAP: u32 = 50;

/// Client for one channel's recent-video queries.
#[derive(Debug, Clone)]
pub struct ChannelClient {
    http: reqwest::Client,
    api_key: String,
    channel_id: String,
    base_url: String,
}

impl ChannelClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self::with_base_url(api_key, channel_id, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        channel_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            channel_id: channel_id.into(),
            base_url: base_url.into(),
        }
    }

    /// Query the channel's most recent videos and return them as a
    /// shuffled candidate list.
    ///
    /// The shuffle keeps repeated runs from always picking the newest
    /// upload; it is best-effort randomization, not uniform. A fresh
    /// call re-queries and re-shuffles.
    pub async fn list_candidates(&self, max_results: u32) -> SourceResult<Vec<Candidate>> {
        let max_results = max_results.min(MAX_RESULTS_CAP);
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("channelId", self.channel_id.as_str()),
                ("part", "snippet,id"),
                ("order", "date"),
                ("maxResults", &max_results.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::api_status(status.as_u16()));
        }

        let search: SearchResponse = response.json().await?;

        let mut candidates: Vec<Candidate> = search
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                let title = item.snippet.map(|s| s.title).unwrap_or_default();
                Some(Candidate::new(video_id, title))
            })
            .collect();

        if candidates.is_empty() {
            warn!(channel_id = %self.channel_id, "No video ids in the search response");
            return Err(SourceError::NoCandidates);
        }

        candidates.shuffle(&mut rand::rng());

        info!(
            channel_id = %self.channel_id,
            count = candidates.len(),
            "Fetched candidate list"
        );

        Ok(candidates)
    }

    /// Look up the channel's logo thumbnail URL (high resolution,
    /// falling back to default).
    pub async fn channel_logo_url(&self) -> SourceResult<String> {
        let url = format!("{}/channels", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("id", self.channel_id.as_str()),
                ("part", "snippet"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::api_status(status.as_u16()));
        }

        let channels: ChannelsResponse = response.json().await?;
        let thumbnails = channels
            .items
            .into_iter()
            .next()
            .map(|item| item.snippet.thumbnails)
            .ok_or(SourceError::BrandingNotFound)?;

        thumbnails
            .high
            .or(thumbnails.default)
            .map(|t| t.url)
            .ok_or(SourceError::BrandingNotFound)
    }

    /// Download the channel logo to `path`, skipping the download when
    /// the file already exists (cache-by-existence, no validation).
    pub async fn download_logo(&self, logo_url: &str, path: &Path) -> SourceResult<()> {
        if path.exists() {
            debug!(path = %path.display(), "Logo already on disk, skipping download");
            return Ok(());
        }

        let response = self.http.get(logo_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::api_status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &bytes).await?;

        info!(path = %path.display(), "Downloaded channel logo");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search_body(ids_and_titles: &[(&str, &str)]) -> serde_json::Value {
        let items: Vec<serde_json::Value> = ids_and_titles
            .iter()
            .map(|(id, title)| {
                serde_json::json!({
                    "id": { "kind": "youtube#video", "videoId": id },
                    "snippet": { "title": title }
                })
            })
            .collect();
        serde_json::json!({ "items": items })
    }

    #[tokio::test]
    async fn test_list_candidates_parses_and_filters() {
        let server = MockServer::start().await;

        let mut body = search_body(&[
            ("abc123def45", "First video"),
            ("xyz987uvw21", "Second video"),
            ("qrs456tuv89", "Third video"),
        ]);
        // A channel entry without a videoId must be skipped.
        body["items"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({
                "id": { "kind": "youtube#channel", "channelId": "UCchannel" },
                "snippet": { "title": "The channel itself" }
            }));

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("channelId", "UCtest"))
            .and(query_param("order", "date"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = ChannelClient::with_base_url("key", "UCtest", server.uri());
        let candidates = client.list_candidates(50).await.unwrap();

        assert_eq!(candidates.len(), 3);
        let ids: HashSet<&str> = candidates.iter().map(|c| c.video_id.as_str()).collect();
        assert_eq!(
            ids,
            HashSet::from(["abc123def45", "xyz987uvw21", "qrs456tuv89"])
        );
        let first = candidates
            .iter()
            .find(|c| c.video_id == "abc123def45")
            .unwrap();
        assert_eq!(first.title, "First video");
        assert_eq!(first.url, "https://www.youtube.com/watch?v=abc123def45");
    }

    #[tokio::test]
    async fn test_list_candidates_caps_max_results() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("maxResults", "50"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(search_body(&[("abc123def45", "v")])),
            )
            .mount(&server)
            .await;

        let client = ChannelClient::with_base_url("key", "UCtest", server.uri());
        // 200 requested, but the query must carry 50 for the mock to match.
        assert!(client.list_candidates(200).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_items_is_no_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
            .mount(&server)
            .await;

        let client = ChannelClient::with_base_url("key", "UCtest", server.uri());
        assert!(matches!(
            client.list_candidates(50).await,
            Err(SourceError::NoCandidates)
        ));
    }

    #[tokio::test]
    async fn test_api_error_status_surfaces() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = ChannelClient::with_base_url("key", "UCtest", server.uri());
        assert!(matches!(
            client.list_candidates(50).await,
            Err(SourceError::ApiStatus { status: 403 })
        ));
    }

    #[tokio::test]
    async fn test_channel_logo_url_prefers_high() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("id", "UCtest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{
                    "snippet": {
                        "thumbnails": {
                            "default": { "url": "https://img.example/default.jpg" },
                            "high": { "url": "https://img.example/high.jpg" }
                        }
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = ChannelClient::with_base_url("key", "UCtest", server.uri());
        assert_eq!(
            client.channel_logo_url().await.unwrap(),
            "https://img.example/high.jpg"
        );
    }

    #[tokio::test]
    async fn test_download_logo_skips_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("channel_logo.png");
        tokio::fs::write(&logo_path, b"cached").await.unwrap();

        // No mock server mounted: any request would fail, so success
        // proves the existence check short-circuited.
        let client = ChannelClient::with_base_url("key", "UCtest", "http://127.0.0.1:9");
        client
            .download_logo("http://127.0.0.1:9/logo.png", &logo_path)
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&logo_path).await.unwrap(), b"cached");
    }
}
