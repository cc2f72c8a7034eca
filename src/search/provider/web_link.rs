//! Web link provider
//!
//! Produces a single result linking to a web search for the query. No network
//! call is made; the only await point is the optional simulated latency.

use std::time::Duration;

use reqwest::Url;

use super::SearchError;
use crate::config::{DEFAULT_WEB_SEARCH_URL, WebConfig};
use crate::search::types::WebResult;

/// Synthesizes web search links
#[derive(Debug, Clone)]
pub struct WebLinkProvider {
    search_url: Url,
    latency: Option<Duration>,
}

impl WebLinkProvider {
    /// Create a provider linking to `search_url`
    ///
    /// A URL that does not parse, or is not http(s), is replaced by the
    /// default search page.
    pub fn new(search_url: &str) -> Self {
        let search_url = match Url::parse(search_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            Ok(url) => {
                log::warn!(
                    "Unsupported scheme {:?} in web search url {:?}, using {}",
                    url.scheme(),
                    search_url,
                    DEFAULT_WEB_SEARCH_URL
                );
                default_search_url()
            }
            Err(e) => {
                log::warn!(
                    "Invalid web search url {:?} ({}), using {}",
                    search_url,
                    e,
                    DEFAULT_WEB_SEARCH_URL
                );
                default_search_url()
            }
        };
        Self {
            search_url,
            latency: None,
        }
    }

    pub fn from_config(config: &WebConfig) -> Self {
        let provider = Self::new(&config.search_url);
        if config.simulated_latency_ms > 0 {
            provider.with_latency(Duration::from_millis(config.simulated_latency_ms))
        } else {
            provider
        }
    }

    /// Delay every search by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn latency(&self) -> Option<Duration> {
        self.latency
    }

    /// Always true; the provider needs no credentials
    pub fn is_configured(&self) -> bool {
        true
    }

    /// URL of the web search page for `query`
    pub fn search_url_for(&self, query: &str) -> String {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", query);
        url.to_string()
    }

    /// Build the single result for `query`
    ///
    /// `max_results` is accepted for interface parity; the list always holds
    /// exactly one entry.
    pub fn build_results(&self, query: &str) -> Vec<WebResult> {
        vec![WebResult {
            id: 1,
            title: format!("{} - Web search", query),
            url: self.search_url_for(query),
            snippet: format!("Search the web for \"{}\".", query),
        }]
    }

    pub async fn search(
        &self,
        query: &str,
        _max_results: usize,
    ) -> Result<Vec<WebResult>, SearchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.build_results(query))
    }
}

impl Default for WebLinkProvider {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            latency: None,
        }
    }
}

fn default_search_url() -> Url {
    Url::parse(DEFAULT_WEB_SEARCH_URL).expect("default web search url is valid")
}

#[cfg(test)]
#[path = "web_link_tests.rs"]
mod web_link_tests;
