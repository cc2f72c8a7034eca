//! Panel search controller
//!
//! Owns one panel's query/provider/results state machine:
//! `Idle -> Loading -> {Success | Fallback | Error}`, with a new query going
//! back to `Loading`. Provider calls run on the search worker; outcomes are
//! applied when the UI loop polls, so the view only ever observes the
//! `Loading` marker or a finished outcome.
//!
//! Only the most recent request's outcome is applied. Each request gets a
//! fresh id, its own response channel and a cancellation token; submitting
//! again cancels the previous token and drops the previous receiver.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::fallback;
use super::types::{PanelState, PanelStatus, ProviderKind, Query};
use super::worker::{SearchRequest, SearchResponse, SearchWorker};
use crate::config::DEFAULT_MAX_RESULTS;

/// Per-panel search state and request bookkeeping
#[derive(Debug)]
pub struct PanelSearchController {
    panel_id: usize,
    provider_kind: ProviderKind,
    state: PanelState,
    max_results: usize,
    worker: Option<SearchWorker>,
    /// Incremented for each new request; responses with another id are stale
    request_id: u64,
    in_flight_request_id: Option<u64>,
    current_cancel_token: Option<CancellationToken>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl PanelSearchController {
    /// Create an idle controller with no worker attached
    pub fn new(panel_id: usize) -> Self {
        Self {
            panel_id,
            provider_kind: ProviderKind::default(),
            state: PanelState::default(),
            max_results: DEFAULT_MAX_RESULTS,
            worker: None,
            request_id: 0,
            in_flight_request_id: None,
            current_cancel_token: None,
            response_rx: None,
        }
    }

    /// Create an idle controller that submits to `worker`
    pub fn with_worker(panel_id: usize, worker: SearchWorker) -> Self {
        let mut controller = Self::new(panel_id);
        controller.attach_worker(worker);
        controller
    }

    pub fn attach_worker(&mut self, worker: SearchWorker) {
        self.worker = Some(worker);
    }

    pub fn set_max_results(&mut self, max_results: usize) {
        self.max_results = max_results;
    }

    pub fn panel_id(&self) -> usize {
        self.panel_id
    }

    /// Provider the next submission targets
    pub fn provider_kind(&self) -> ProviderKind {
        self.provider_kind
    }

    /// Read-only snapshot for the view
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Submit `text` to the currently selected provider
    pub fn submit(&mut self, text: &str) -> bool {
        self.submit_query(text, self.provider_kind)
    }

    /// Submit `text` to the provider for `kind`
    ///
    /// Blank text is ignored and leaves the state untouched. Otherwise any
    /// in-flight request is cancelled, the panel enters `Loading`, and the
    /// outcome is applied by a later `poll_response_channel`.
    ///
    /// Returns true if a search was started.
    pub fn submit_query(&mut self, text: &str, kind: ProviderKind) -> bool {
        let Some(query) = Query::new(text, kind) else {
            return false;
        };

        self.cancel_in_flight_request();
        self.provider_kind = kind;
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        self.state = PanelState {
            query: Some(query.clone()),
            status: PanelStatus::Loading,
            results: Default::default(),
            error_message: None,
        };

        let (response_tx, response_rx) = mpsc::channel();
        let cancel_token = CancellationToken::new();
        let request = SearchRequest::Query {
            query,
            max_results: self.max_results,
            request_id,
            cancel_token: cancel_token.clone(),
            response_tx,
        };

        let sent = self
            .worker
            .as_ref()
            .is_some_and(|worker| worker.submit(request));

        if sent {
            log::debug!(
                "Panel {}: submitted request {} ({})",
                self.panel_id,
                request_id,
                kind
            );
            self.in_flight_request_id = Some(request_id);
            self.current_cancel_token = Some(cancel_token);
            self.response_rx = Some(response_rx);
        } else {
            self.set_error("Search worker unavailable".to_string());
        }

        true
    }

    /// Select the provider for the next submission
    ///
    /// Never searches. Switching to a different kind cancels any in-flight
    /// request and resets the panel to `Idle` so results from the other
    /// provider are not shown. Returns true if the kind changed.
    pub fn set_provider_kind(&mut self, kind: ProviderKind) -> bool {
        if kind == self.provider_kind {
            return false;
        }

        self.cancel_in_flight_request();
        // Any response still on its way now carries a stale id
        self.request_id = self.request_id.wrapping_add(1);
        self.provider_kind = kind;
        self.state = PanelState::default();
        true
    }

    /// Poll the response channel for the current request
    ///
    /// Call from the UI loop. Uses try_recv() for non-blocking polling.
    /// Returns true if any state changed (responses received or disconnected).
    pub fn poll_response_channel(&mut self) -> bool {
        let Some(rx) = self.response_rx.as_ref() else {
            return false;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let had_responses = !responses.is_empty();

        for response in responses {
            self.process_response(response);
        }

        if disconnected {
            self.response_rx = None;
            if self.state.is_loading() {
                self.set_error("Search worker disconnected unexpectedly".to_string());
            }
        }

        had_responses || disconnected
    }

    /// Apply one worker response, ignoring any that is not for the current request
    pub fn process_response(&mut self, response: SearchResponse) {
        let current_request_id = self.request_id;

        match response {
            SearchResponse::Complete {
                request_id,
                results,
            } => {
                if request_id != current_request_id {
                    log::debug!(
                        "Panel {}: ignoring stale results from request {} (current: {})",
                        self.panel_id,
                        request_id,
                        current_request_id
                    );
                    return;
                }
                self.finish_request();
                self.state.status = PanelStatus::Success;
                self.state.results = results;
                self.state.error_message = None;
            }
            SearchResponse::Failed {
                request_id,
                kind,
                error,
            } => {
                if request_id != current_request_id {
                    log::debug!(
                        "Panel {}: ignoring stale failure from request {} (current: {})",
                        self.panel_id,
                        request_id,
                        current_request_id
                    );
                    return;
                }
                self.finish_request();
                let outcome = fallback::on_provider_failure(kind, &error);
                self.state.status = outcome.status;
                self.state.results = outcome.results;
                self.state.error_message = Some(outcome.error_message);
            }
            SearchResponse::Cancelled { request_id } => {
                log::debug!("Panel {}: request {} cancelled", self.panel_id, request_id);
                if request_id == current_request_id {
                    self.finish_request();
                }
            }
        }
    }

    /// Cancel any in-flight request
    ///
    /// Calls cancel() on the CancellationToken to abort the provider call,
    /// then drops the receiver so nothing from that request can be applied.
    /// Returns true if there was an in-flight request to cancel.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        self.response_rx = None;
        if let Some(token) = self.current_cancel_token.take() {
            log::debug!(
                "Panel {}: cancelling in-flight request {:?}",
                self.panel_id,
                self.in_flight_request_id
            );
            token.cancel();
            self.in_flight_request_id = None;
            return true;
        }
        false
    }

    fn finish_request(&mut self) {
        self.in_flight_request_id = None;
        self.current_cancel_token = None;
    }

    fn set_error(&mut self, error: String) {
        self.finish_request();
        self.state.status = PanelStatus::Error;
        self.state.results = Default::default();
        self.state.error_message = Some(error);
    }
}

impl Drop for PanelSearchController {
    fn drop(&mut self) {
        self.cancel_in_flight_request();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
