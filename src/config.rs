// Configuration module for multisearch
// Loads ~/.config/multisearch/config.toml, then applies environment overrides.

mod types;

pub use types::{
    Config, DEFAULT_MAX_RESULTS, DEFAULT_VIDEO_API_URL, DEFAULT_WEB_SEARCH_URL, LayoutConfig,
    PanelLayout, VideoConfig, WebConfig,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `video.api_key`
pub const ENV_VIDEO_API_KEY: &str = "MULTISEARCH_VIDEO_API_KEY";
/// Environment variable overriding `video.api_url`
pub const ENV_VIDEO_API_URL: &str = "MULTISEARCH_VIDEO_API_URL";
/// Environment variable overriding `dev_mode`
pub const ENV_DEV_MODE: &str = "MULTISEARCH_DEV_MODE";
/// Environment variable overriding `debug`
pub const ENV_DEBUG: &str = "MULTISEARCH_DEBUG";

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/multisearch/config.toml plus environment
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path plus environment
pub fn load_config_from(path: &Path) -> ConfigResult {
    let mut result = read_config_file(path);
    apply_env_overrides(&mut result.config, |name| std::env::var(name).ok());
    result
}

fn read_config_file(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Apply environment overrides on top of file values
///
/// `lookup` resolves a variable name to its value; empty values are ignored
/// for the credential fields so a blank variable never wipes a file setting.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_VIDEO_API_KEY).filter(|v| !v.trim().is_empty()) {
        config.video.api_key = Some(key);
    }
    if let Some(url) = lookup(ENV_VIDEO_API_URL).filter(|v| !v.trim().is_empty()) {
        config.video.api_url = url;
    }
    if let Some(flag) = lookup(ENV_DEV_MODE) {
        config.dev_mode = parse_flag(&flag);
    }
    if let Some(flag) = lookup(ENV_DEBUG) {
        config.debug = parse_flag(&flag);
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Check the loaded configuration and return human-readable warnings
///
/// Missing video credentials are expected in dev mode and produce no warning.
pub fn validate_config(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.dev_mode {
        return warnings;
    }

    if !config.video.has_api_key() {
        warnings.push("Video API key is not configured".to_string());
    }
    if !config.video.has_api_url() {
        warnings.push("Video API URL is not configured".to_string());
    }

    warnings
}

/// Log configuration status without revealing credentials
pub fn log_config_status(config: &Config) {
    log::debug!(
        "Configuration: dev_mode={}, debug={}, panels={}, web_latency_ms={}, video_api_key={}, video_api_url={:?}",
        config.dev_mode,
        config.debug,
        config.layout.panels.panel_count(),
        config.web.simulated_latency_ms,
        config.video.has_api_key(),
        config.video.api_url
    );
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/multisearch/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("multisearch")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
