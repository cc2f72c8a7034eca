// Configuration type definitions

use serde::Deserialize;

/// Default web search endpoint the synthesized links point at
pub const DEFAULT_WEB_SEARCH_URL: &str = "https://www.google.com/search";

/// Default base URL of the video search API
pub const DEFAULT_VIDEO_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default number of results requested per search
pub const DEFAULT_MAX_RESULTS: usize = 5;

fn default_search_url() -> String {
    DEFAULT_WEB_SEARCH_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_VIDEO_API_URL.to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Transport timeout for video API calls
fn default_timeout_secs() -> u64 {
    10
}

/// Number of search panels on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "u8")]
pub enum PanelLayout {
    #[default]
    Two,
    Three,
    Six,
}

impl PanelLayout {
    pub const ALL: [PanelLayout; 3] = [PanelLayout::Two, PanelLayout::Three, PanelLayout::Six];

    pub fn panel_count(self) -> usize {
        match self {
            PanelLayout::Two => 2,
            PanelLayout::Three => 3,
            PanelLayout::Six => 6,
        }
    }

    /// Layout that follows this one when cycling, wrapping around
    pub fn next(self) -> Self {
        match self {
            PanelLayout::Two => PanelLayout::Three,
            PanelLayout::Three => PanelLayout::Six,
            PanelLayout::Six => PanelLayout::Two,
        }
    }
}

impl TryFrom<u8> for PanelLayout {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            2 => Ok(PanelLayout::Two),
            3 => Ok(PanelLayout::Three),
            6 => Ok(PanelLayout::Six),
            other => Err(format!("unsupported panel count {}, expected 2, 3 or 6", other)),
        }
    }
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LayoutConfig {
    #[serde(default)]
    pub panels: PanelLayout,
}

/// Web link provider configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Search page the synthesized result links to
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Artificial delay before results are returned
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            search_url: default_search_url(),
            simulated_latency_ms: 0,
        }
    }
}

/// Video provider configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct VideoConfig {
    /// API key (required for video search)
    pub api_key: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            api_key: None,
            api_url: default_api_url(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl VideoConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn has_api_url(&self) -> bool {
        !self.api_url.trim().is_empty()
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Suppresses missing-credential warnings
    #[serde(default)]
    pub dev_mode: bool,
    /// Enables debug logging in release builds
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
