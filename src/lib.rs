//! multisearch library - side-by-side web and video search panels
//!
//! This library exposes the core functionality of multisearch for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod layout;
pub mod notification;
pub mod search;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::MultiSearchError;
pub use search::{PanelSearchController, ProviderKind, SearchWorker};
