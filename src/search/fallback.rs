//! Fallback policy
//!
//! Decides what a panel shows when its provider fails. Video failures degrade
//! to a fixed set of known-good video ids; web failures surface as errors.

use super::provider::SearchError;
use super::types::{PanelStatus, ProviderKind, ResultList};

/// Ordered video ids with no metadata attached
pub type FallbackVideoSet = &'static [&'static str];

/// Known-valid videos shown when the video provider is unavailable
pub const FALLBACK_VIDEO_IDS: FallbackVideoSet = &["dQw4w9WgXcQ", "jNQXAC9IVRw", "L_jWHffIx5E"];

/// What the panel adopts after a provider failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOutcome {
    pub status: PanelStatus,
    pub results: ResultList,
    pub error_message: String,
}

/// Map a provider failure to the state the panel should show
pub fn on_provider_failure(kind: ProviderKind, error: &SearchError) -> FallbackOutcome {
    match kind {
        ProviderKind::Video => FallbackOutcome {
            status: PanelStatus::Fallback,
            results: ResultList::Fallback(FALLBACK_VIDEO_IDS),
            error_message: error.to_string(),
        },
        // The web provider never fails; this arm keeps the policy total.
        ProviderKind::Web => FallbackOutcome {
            status: PanelStatus::Error,
            results: ResultList::Empty,
            error_message: error.to_string(),
        },
    }
}
