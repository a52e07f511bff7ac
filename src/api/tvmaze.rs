//! TVmaze API client
//!
//! Searches the public show directory and lists episodes for a show.
//! API docs: https://www.tvmaze.com/api
//!
//! The `try_*` methods surface [`TvMazeError`]. The plain methods never fail:
//! any error or empty result collapses into a single placeholder record.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::image::resolve_image;
use crate::models::{EpisodeSummary, ImageLinks, ShowSummary, DEFAULT_IMAGE};

/// Public TVmaze endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure talking to the TVmaze service
#[derive(Error, Debug)]
pub enum TvMazeError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// TVmaze API client
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    base_url: String,
    client: reqwest::Client,
    default_image: String,
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TvMazeClient {
    /// Create a client for the public TVmaze API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: build_http_client(DEFAULT_TIMEOUT),
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let mut client = Self::with_base_url(config.base_url());
        client.client = build_http_client(config.timeout());
        if let Some(image) = config.default_image.as_deref().filter(|s| !s.is_empty()) {
            client.default_image = image.to_string();
        }
        client
    }

    /// Point an already configured client at another endpoint
    ///
    /// Timeout and default image are kept.
    pub fn at_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// GET `endpoint` and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, TvMazeError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "tvmaze request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    TvMazeError::InvalidResponse(format!("JSON parse error: {}", e))
                })
            }
            StatusCode::NOT_FOUND => Err(TvMazeError::NotFound),
            status => Err(TvMazeError::Status(status.as_u16())),
        }
    }

    // -------------------------------------------------------------------------
    // Shows
    // -------------------------------------------------------------------------

    /// Search for shows, surfacing failures
    ///
    /// A `null` body or an empty array yields `Ok(vec![])`.
    pub async fn try_search_shows(&self, query: &str) -> Result<Vec<ShowSummary>, TvMazeError> {
        let endpoint = format!("/search/shows?q={}", urlencoding::encode(query));
        let items: Option<Vec<SearchItemRaw>> = self.get(&endpoint).await?;

        Ok(items
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.into_show().into_summary(&self.default_image))
            .collect())
    }

    /// Search for shows; always returns at least one record
    pub async fn search_shows(&self, query: &str) -> Vec<ShowSummary> {
        match self.try_search_shows(query).await {
            Ok(shows) if !shows.is_empty() => shows,
            Ok(_) => {
                debug!(query, "no shows found, using placeholder");
                vec![self.show_placeholder()]
            }
            Err(e) => {
                warn!(query, error = %e, "show search failed, using placeholder");
                vec![self.show_placeholder()]
            }
        }
    }

    // -------------------------------------------------------------------------
    // Episodes
    // -------------------------------------------------------------------------

    /// List episodes of a show, surfacing failures
    pub async fn try_get_episodes(&self, show_id: i64) -> Result<Vec<EpisodeSummary>, TvMazeError> {
        let endpoint = format!("/shows/{}/episodes", show_id);
        let items: Option<Vec<EpisodeRaw>> = self.get(&endpoint).await?;

        Ok(items
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.into_summary(show_id, &self.default_image))
            .collect())
    }

    /// List episodes of a show; always returns at least one record and every
    /// record carries `show_id`
    pub async fn get_episodes(&self, show_id: i64) -> Vec<EpisodeSummary> {
        match self.try_get_episodes(show_id).await {
            Ok(episodes) if !episodes.is_empty() => episodes,
            Ok(_) => {
                debug!(show_id, "no episodes found, using placeholder");
                vec![self.episode_placeholder(show_id)]
            }
            Err(e) => {
                warn!(show_id, error = %e, "episode fetch failed, using placeholder");
                vec![self.episode_placeholder(show_id)]
            }
        }
    }

    fn show_placeholder(&self) -> ShowSummary {
        ShowSummary {
            image: self.default_image.clone(),
            ..ShowSummary::placeholder()
        }
    }

    fn episode_placeholder(&self, show_id: i64) -> EpisodeSummary {
        EpisodeSummary {
            image: self.default_image.clone(),
            ..EpisodeSummary::placeholder(show_id)
        }
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("showscout/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// Search results arrive wrapped as `{"score": .., "show": {..}}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchItemRaw {
    Envelope { show: ShowRaw },
    Bare(ShowRaw),
}

impl SearchItemRaw {
    fn into_show(self) -> ShowRaw {
        match self {
            SearchItemRaw::Envelope { show } => show,
            SearchItemRaw::Bare(show) => show,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShowRaw {
    id: i64,
    name: Option<String>,
    summary: Option<String>,
    image: Option<ImageLinks>,
}

impl ShowRaw {
    fn into_summary(self, default_image: &str) -> ShowSummary {
        ShowSummary {
            image: resolve_image(self.image.as_ref(), default_image),
            id: self.id,
            name: self.name.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EpisodeRaw {
    id: i64,
    name: Option<String>,
    season: Option<i64>,
    // Specials carry a null number
    number: Option<i64>,
    summary: Option<String>,
    image: Option<ImageLinks>,
}

impl EpisodeRaw {
    fn into_summary(self, show_id: i64, default_image: &str) -> EpisodeSummary {
        EpisodeSummary {
            image: resolve_image(self.image.as_ref(), default_image),
            id: self.id,
            show_id,
            name: self.name.unwrap_or_default(),
            season: self.season.unwrap_or(0),
            number: self.number.unwrap_or(0),
            summary: self.summary.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_unwraps_envelope() {
        let json = r#"{"score": 0.9, "show": {"id": 975, "name": "Batman", "summary": null, "image": null}}"#;
        let item: SearchItemRaw = serde_json::from_str(json).unwrap();
        let show = item.into_show().into_summary(DEFAULT_IMAGE);
        assert_eq!(show.id, 975);
        assert_eq!(show.name, "Batman");
        assert_eq!(show.summary, "");
        assert_eq!(show.image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_search_item_accepts_bare_show() {
        let json = r#"{"id": 1, "name": "Under the Dome", "image": {"medium": "m.jpg"}}"#;
        let item: SearchItemRaw = serde_json::from_str(json).unwrap();
        let show = item.into_show().into_summary(DEFAULT_IMAGE);
        assert_eq!(show.id, 1);
        assert_eq!(show.image, "m.jpg");
    }

    #[test]
    fn test_episode_null_number_maps_to_zero() {
        let json = r#"{"id": 5, "name": "Special", "season": 2, "number": null, "summary": null, "image": null}"#;
        let raw: EpisodeRaw = serde_json::from_str(json).unwrap();
        let ep = raw.into_summary(99, "fallback.png");
        assert_eq!(ep.show_id, 99);
        assert_eq!(ep.season, 2);
        assert_eq!(ep.number, 0);
        assert_eq!(ep.image, "fallback.png");
    }

    #[test]
    fn test_base_url_override_keeps_configured_image() {
        let config = Config {
            base_url: Some("http://from-file:8080".into()),
            default_image: Some("https://example.com/none.png".into()),
            timeout_secs: Some(5),
            result_limit: None,
        };
        let client = TvMazeClient::from_config(&config).at_base_url("http://localhost:4321/");
        assert_eq!(client.base_url(), "http://localhost:4321");
        assert_eq!(client.default_image(), "https://example.com/none.png");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = TvMazeClient::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }
}
