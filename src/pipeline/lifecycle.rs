use crate::{Error, Result};
use tracing::{debug, info, warn};
use uuid::Uuid;

// Request states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validated,
    ModelCalled,
    Normalized,
    Enriched,
    Responded,
    Failed,
}

// Request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    InputAccepted,
    ModelReplied,
    ReplyNormalized,
    EnrichmentFinished,
    ResponseReady,
    ErrorOccurred,
}

/// Tracks one request from receipt to response. There is no retry edge: once
/// `Responded` or `Failed` is reached the lifecycle is over.
#[derive(Debug)]
pub struct RequestLifecycle {
    request_id: Uuid,
    endpoint: &'static str,
    state: RequestState,
}

impl RequestLifecycle {
    pub fn new(endpoint: &'static str) -> Self {
        let request_id = Uuid::new_v4();
        debug!("📨 Request {} received on {}", request_id, endpoint);
        Self {
            request_id,
            endpoint,
            state: RequestState::Received,
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn current_state(&self) -> RequestState {
        self.state
    }

    pub fn transition(&mut self, event: RequestEvent) -> Result<()> {
        let new_state = match (self.state, event) {
            (RequestState::Received, RequestEvent::InputAccepted) => RequestState::Validated,
            (RequestState::Validated, RequestEvent::ModelReplied) => RequestState::ModelCalled,
            (RequestState::ModelCalled, RequestEvent::ReplyNormalized) => {
                RequestState::Normalized
            }
            (RequestState::Normalized, RequestEvent::EnrichmentFinished) => {
                RequestState::Enriched
            }
            (RequestState::Normalized | RequestState::Enriched, RequestEvent::ResponseReady) => {
                RequestState::Responded
            }
            (state, RequestEvent::ErrorOccurred) if !Self::is_terminal_state(state) => {
                RequestState::Failed
            }
            (state, event) => {
                warn!(
                    "❌ Invalid lifecycle transition for request {} from {:?} with event {:?}",
                    self.request_id, state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", state),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "🔄 Request {} on {}: {:?} -> {:?} (event: {:?})",
            self.request_id, self.endpoint, self.state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    /// Fires `ErrorOccurred` and hands the error back so callers can
    /// `return Err(lifecycle.fail(e))`. A finished request keeps its state.
    pub fn fail(&mut self, error: Error) -> Error {
        match self.transition(RequestEvent::ErrorOccurred) {
            Ok(()) => info!(
                "🎯 Request {} on {} failed: {}",
                self.request_id, self.endpoint, error
            ),
            Err(_) => warn!(
                "Request {} already finished as {:?}, ignoring failure: {}",
                self.request_id, self.state, error
            ),
        }
        error
    }

    pub fn is_terminal(&self) -> bool {
        Self::is_terminal_state(self.state)
    }

    fn is_terminal_state(state: RequestState) -> bool {
        matches!(state, RequestState::Responded | RequestState::Failed)
    }
}
