//! Video search API client
//!
//! Queries the `<api_url>/search` endpoint of a YouTube Data API compatible
//! service and maps its items to VideoResult. Uses reqwest for async HTTP.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::SearchError;
use crate::config::VideoConfig;
use crate::search::types::VideoResult;

const PROVIDER_NAME: &str = "Video";

/// Async video search client
///
/// Reads its credentials once at construction. Blank values leave the
/// provider unconfigured, and `search` then fails without touching the network.
#[derive(Debug, Clone)]
pub struct VideoProvider {
    client: Client,
    api_key: String,
    api_url: String,
}

impl VideoProvider {
    /// Create a client with a transport-level `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build video HTTP client with timeout: {}", e);
                Client::new()
            });
        Self {
            client,
            api_key: api_key.trim().to_string(),
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &VideoConfig) -> Self {
        Self::new(
            config.api_key.clone().unwrap_or_default(),
            config.api_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// True when both an API key and a base URL are present
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_url.is_empty()
    }

    fn not_configured_error(&self) -> SearchError {
        let message = if self.api_key.is_empty() {
            "Video API key is not configured. Set 'api_key' in [video] or MULTISEARCH_VIDEO_API_KEY."
        } else {
            "Video API URL is not configured. Set 'api_url' in [video] or MULTISEARCH_VIDEO_API_URL."
        };
        SearchError::NotConfigured {
            provider: PROVIDER_NAME.to_string(),
            message: message.to_string(),
        }
    }

    fn search_endpoint(&self) -> String {
        format!("{}/search", self.api_url)
    }

    /// Search for videos matching `query`
    ///
    /// # Returns
    /// * `Ok(Vec<VideoResult>)` - At most `max_results` items in API order
    /// * `Err(SearchError::NotConfigured)` - Missing key or URL, no request made
    /// * `Err(SearchError::Api)` - Non-success HTTP status
    /// * `Err(SearchError::Network)` - Transport failure or timeout
    /// * `Err(SearchError::Parse)` - Body is not the expected JSON
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<VideoResult>, SearchError> {
        if !self.is_configured() {
            return Err(self.not_configured_error());
        }

        let max_results_param = max_results.to_string();
        let response = self
            .client
            .get(self.search_endpoint())
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results_param.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network {
                provider: PROVIDER_NAME.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Video API returned {} for {:?}", status, query);
            return Err(SearchError::Api {
                provider: PROVIDER_NAME.to_string(),
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            });
        }

        let body = response.text().await.map_err(|e| SearchError::Network {
            provider: PROVIDER_NAME.to_string(),
            message: e.to_string(),
        })?;

        parse_search_response(&body, max_results)
    }
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    thumbnails: Thumbnails,
    channel_title: String,
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl From<SearchItem> for VideoResult {
    fn from(item: SearchItem) -> Self {
        VideoResult {
            id: item.id.video_id,
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url: item.snippet.thumbnails.default.url,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
        }
    }
}

/// Parse a search response body, keeping API order and at most `max_results` items
pub(crate) fn parse_search_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<VideoResult>, SearchError> {
    let response: SearchListResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse {
            provider: PROVIDER_NAME.to_string(),
            message: format!("Unexpected search response: {}", e),
        })?;

    Ok(response
        .items
        .into_iter()
        .take(max_results)
        .map(VideoResult::from)
        .collect())
}

#[cfg(test)]
#[path = "video_tests.rs"]
mod video_tests;
