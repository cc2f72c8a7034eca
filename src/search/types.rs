//! Search data model
//!
//! Queries, per-provider result records, and the panel state snapshot that
//! the view renders.

use std::fmt;

use super::fallback::FallbackVideoSet;

/// Which provider a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    Web,
    Video,
}

impl ProviderKind {
    /// Display label for panel titles and logs
    pub fn label(self) -> &'static str {
        match self {
            ProviderKind::Web => "Web",
            ProviderKind::Video => "Video",
        }
    }

    /// The kind that follows this one when toggling
    pub fn next(self) -> Self {
        match self {
            ProviderKind::Web => ProviderKind::Video,
            ProviderKind::Video => ProviderKind::Web,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A submitted query. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    provider_kind: ProviderKind,
}

impl Query {
    /// Build a query from raw input, trimming surrounding whitespace
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(text: &str, provider_kind: ProviderKind) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            provider_kind,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider_kind
    }
}

/// A synthesized web search link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResult {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A video returned by the video API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: String,
}

impl VideoResult {
    pub fn watch_url(&self) -> String {
        watch_url(&self.id)
    }

    pub fn embed_url(&self) -> String {
        embed_url(&self.id)
    }
}

/// Watch page URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Embeddable player URL for a video id
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

/// Results held by a panel, tagged by where they came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultList {
    #[default]
    Empty,
    Web(Vec<WebResult>),
    Video(Vec<VideoResult>),
    /// Degraded video results: identifiers only, no metadata
    Fallback(FallbackVideoSet),
}

impl ResultList {
    pub fn len(&self) -> usize {
        match self {
            ResultList::Empty => 0,
            ResultList::Web(results) => results.len(),
            ResultList::Video(results) => results.len(),
            ResultList::Fallback(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lifecycle of a panel's current query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Fallback,
    Error,
}

impl PanelStatus {
    /// Whether results may be present in this status
    pub fn holds_results(self) -> bool {
        matches!(self, PanelStatus::Success | PanelStatus::Fallback)
    }

    /// Whether an error message may be present in this status
    pub fn holds_error(self) -> bool {
        matches!(self, PanelStatus::Fallback | PanelStatus::Error)
    }
}

/// Renderable state of one panel
///
/// Results are non-empty only in `Success`/`Fallback`, and `error_message`
/// is set only in `Fallback`/`Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    pub query: Option<Query>,
    pub status: PanelStatus,
    pub results: ResultList,
    pub error_message: Option<String>,
}

impl PanelState {
    pub fn is_loading(&self) -> bool {
        self.status == PanelStatus::Loading
    }

    /// Checks the results/error invariants against the current status
    pub fn is_consistent(&self) -> bool {
        (self.results.is_empty() || self.status.holds_results())
            && (self.error_message.is_none() || self.status.holds_error())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
