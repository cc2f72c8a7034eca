//! Search worker thread
//!
//! Runs provider calls in a background thread so the UI never blocks.
//! Receives requests via channel, spawns one task per request on a tokio
//! runtime, and sends each outcome back on the channel carried by the request.
//!
//! Tasks run concurrently, so a slow video search in one panel never delays
//! another panel's results.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::provider::{ProviderRegistry, SearchError};
use super::types::{ProviderKind, Query, ResultList};

/// Request messages sent to the search worker
#[derive(Debug)]
pub enum SearchRequest {
    /// Run `query` against the provider for its kind
    Query {
        query: Query,
        max_results: usize,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        cancel_token: CancellationToken,
        /// Where the outcome for this request is delivered
        response_tx: Sender<SearchResponse>,
    },
}

/// Response messages sent back to a panel controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    /// The provider returned results
    Complete { request_id: u64, results: ResultList },
    /// The provider failed; the controller applies the fallback policy
    Failed {
        request_id: u64,
        kind: ProviderKind,
        error: SearchError,
    },
    /// The request was cancelled before finishing
    Cancelled { request_id: u64 },
}

/// Handle used by controllers to submit work to the worker thread
#[derive(Debug, Clone)]
pub struct SearchWorker {
    request_tx: UnboundedSender<SearchRequest>,
}

impl SearchWorker {
    /// Spawn the worker thread with its own tokio runtime
    pub fn spawn(registry: ProviderRegistry) -> Self {
        let (request_tx, request_rx) = unbounded_channel();

        std::thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create search worker runtime: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(Arc::new(registry), request_rx));
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("Search worker thread panicked: {}", panic_msg);
            }
        });

        Self { request_tx }
    }

    /// Queue a request, returning false when the worker is gone
    pub fn submit(&self, request: SearchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }
}

/// Main async worker loop - processes requests until every handle is dropped
async fn worker_loop(
    registry: Arc<ProviderRegistry>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
) {
    while let Some(request) = request_rx.recv().await {
        match request {
            SearchRequest::Query {
                query,
                max_results,
                request_id,
                cancel_token,
                response_tx,
            } => {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    handle_query_async(
                        &registry,
                        &query,
                        max_results,
                        request_id,
                        cancel_token,
                        &response_tx,
                    )
                    .await;
                });
            }
        }
    }
    log::debug!("Search worker request channel closed");
}

/// Handle a single query request
///
/// Send failures are ignored: the controller dropped its receiver because
/// the request was superseded.
async fn handle_query_async(
    registry: &ProviderRegistry,
    query: &Query,
    max_results: usize,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: &Sender<SearchResponse>,
) {
    if cancel_token.is_cancelled() {
        let _ = response_tx.send(SearchResponse::Cancelled { request_id });
        return;
    }

    let kind = query.provider_kind();
    let provider = match registry.get(kind) {
        Some(p) => p,
        None => {
            let _ = response_tx.send(SearchResponse::Failed {
                request_id,
                kind,
                error: SearchError::NotConfigured {
                    provider: kind.label().to_string(),
                    message: format!("{} search provider is not configured", kind.label()),
                },
            });
            return;
        }
    };

    log::debug!(
        "Request {}: {} search for {:?}",
        request_id,
        kind,
        query.text()
    );

    let response = match provider
        .search_with_cancel(query.text(), max_results, cancel_token)
        .await
    {
        Ok(results) => SearchResponse::Complete {
            request_id,
            results,
        },
        Err(SearchError::Cancelled) => SearchResponse::Cancelled { request_id },
        Err(error) => {
            log::debug!("Request {} failed: {}", request_id, error);
            SearchResponse::Failed {
                request_id,
                kind,
                error,
            }
        }
    };

    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
