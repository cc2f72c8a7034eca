//! Search core
//!
//! Per-panel search controllers, the providers they dispatch to, the fallback
//! policy for failed searches, and the background worker that runs provider
//! calls off the UI thread. Nothing here depends on the terminal UI.

mod controller;
pub mod fallback;
pub mod provider;
pub mod types;
pub mod worker;

pub use controller::PanelSearchController;
pub use fallback::{FALLBACK_VIDEO_IDS, FallbackOutcome, FallbackVideoSet, on_provider_failure};
pub use provider::{ProviderRegistry, SearchError, SearchProvider, VideoProvider, WebLinkProvider};
pub use types::{
    PanelState, PanelStatus, ProviderKind, Query, ResultList, VideoResult, WebResult, embed_url,
    watch_url,
};
pub use worker::{SearchRequest, SearchResponse, SearchWorker};
