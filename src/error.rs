use std::path::PathBuf;

use thiserror::Error;

use crate::config::PanelLayout;

#[derive(Debug, Error)]
pub enum MultiSearchError {
    #[error("Invalid layout '{0}': expected 2, 3 or 6 panels")]
    InvalidLayout(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a `--layout` argument into a panel layout
pub fn parse_layout(value: &str) -> Result<PanelLayout, MultiSearchError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|count| PanelLayout::try_from(count).ok())
        .ok_or_else(|| MultiSearchError::InvalidLayout(value.to_string()))
}
