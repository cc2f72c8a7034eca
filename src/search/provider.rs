//! Search provider abstraction
//!
//! Defines the SearchProvider enum, SearchError types, and the registry that maps
//! each ProviderKind to its provider instance.

use std::collections::HashMap;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::types::{ProviderKind, ResultList};
use crate::config::Config;

mod video;
mod web_link;

pub use video::VideoProvider;
pub use web_link::WebLinkProvider;

/// Errors that can occur while running a search
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// Provider cannot operate (missing credentials or endpoint)
    #[error("[{provider}] {message}")]
    NotConfigured { provider: String, message: String },

    /// Remote API answered with a non-success status
    #[error("[{provider}] API error ({status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    /// Transport failed before a response arrived (includes timeouts)
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// Response body did not match the expected shape
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },

    /// Request was superseded and aborted
    #[error("Search cancelled")]
    Cancelled,
}

impl SearchError {
    /// True for failures known before any network attempt
    pub fn is_configuration(&self) -> bool {
        matches!(self, SearchError::NotConfigured { .. })
    }
}

/// Search provider implementations, one variant per ProviderKind
#[derive(Debug, Clone)]
pub enum SearchProvider {
    /// Synthesized web search links (local, never fails)
    Web(WebLinkProvider),
    /// Remote video search API
    Video(VideoProvider),
}

impl SearchProvider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            SearchProvider::Web(_) => ProviderKind::Web,
            SearchProvider::Video(_) => ProviderKind::Video,
        }
    }

    /// Returns the display name of the provider
    pub fn provider_name(&self) -> &'static str {
        self.kind().label()
    }

    pub fn is_configured(&self) -> bool {
        match self {
            SearchProvider::Web(provider) => provider.is_configured(),
            SearchProvider::Video(provider) => provider.is_configured(),
        }
    }

    /// Run a search and tag the results with this provider's variant
    pub async fn search(&self, query: &str, max_results: usize) -> Result<ResultList, SearchError> {
        match self {
            SearchProvider::Web(provider) => provider
                .search(query, max_results)
                .await
                .map(ResultList::Web),
            SearchProvider::Video(provider) => provider
                .search(query, max_results)
                .await
                .map(ResultList::Video),
        }
    }

    /// Run a search that aborts as soon as `cancel_token` fires
    ///
    /// # Returns
    /// * `Ok(ResultList)` - Search completed
    /// * `Err(SearchError::Cancelled)` - Request was cancelled
    /// * `Err(SearchError::*)` - Provider failure
    pub async fn search_with_cancel(
        &self,
        query: &str,
        max_results: usize,
        cancel_token: CancellationToken,
    ) -> Result<ResultList, SearchError> {
        if cancel_token.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("{} search for {:?} cancelled", self.provider_name(), query);
                Err(SearchError::Cancelled)
            }

            result = self.search(query, max_results) => result,
        }
    }
}

/// Lookup table from ProviderKind to its provider
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, SearchProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every provider from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with(SearchProvider::Web(WebLinkProvider::from_config(&config.web)))
            .with(SearchProvider::Video(VideoProvider::from_config(&config.video)))
    }

    /// Register a provider, replacing any previous one of the same kind
    pub fn with(mut self, provider: SearchProvider) -> Self {
        self.providers.insert(provider.kind(), provider);
        self
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&SearchProvider> {
        self.providers.get(&kind)
    }

    pub fn is_configured(&self, kind: ProviderKind) -> bool {
        self.get(kind).is_some_and(SearchProvider::is_configured)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
