//! Request lifecycle orchestration.
//!
//! One [`PredictionSession`] lives for the whole user session and cycles
//! Idle → Loading → {Success, Error} → Loading → … indefinitely. It owns the
//! single [`RequestState`] instance; every other part of the core is a pure
//! function over its inputs.

use crate::{
    backend::{PredictionBackend, RawResponse},
    error::ClientError,
    model::ForecastResult,
    normalize, validate,
};

/// Generic user-facing failure text, from the original application.
pub const GENERIC_ERROR_MESSAGE: &str = "Error al generar predicción";

/// User-facing text for transport-level failures.
pub const NETWORK_ERROR_MESSAGE: &str = "No se pudo conectar con el servicio de predicción";

/// Lifecycle of the single outstanding prediction request.
///
/// `Loading` and `Error` carry the previously displayed result so a reload
/// never flashes an empty state and a failed re-submission keeps the last
/// good forecast visible under the error banner.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        previous: Option<ForecastResult>,
    },
    Success(ForecastResult),
    Error {
        message: String,
        previous: Option<ForecastResult>,
    },
}

impl RequestState {
    /// Most recent successful result still on display, if any.
    pub fn result(&self) -> Option<&ForecastResult> {
        match self {
            RequestState::Idle => None,
            RequestState::Loading { previous } => previous.as_ref(),
            RequestState::Success(result) => Some(result),
            RequestState::Error { previous, .. } => previous.as_ref(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }
}

/// Identifies one issued request so a late response can be matched against
/// the most recently issued one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    pub horizon_days: u32,
}

/// Owns the session-long request state machine.
///
/// Re-entrant and without terminal state; only the most recently issued
/// request may resolve into state (stale-response discard), so correctness
/// does not depend on any UI lifecycle.
#[derive(Debug)]
pub struct PredictionSession {
    backend: Box<dyn PredictionBackend>,
    state: RequestState,
    latest_seq: u64,
}

impl PredictionSession {
    pub fn new(backend: Box<dyn PredictionBackend>) -> Self {
        Self { backend, state: RequestState::Idle, latest_seq: 0 }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Sole entry point for consumers: validate, fetch, resolve.
    ///
    /// Always leaves the state in `Success` or `Error`, never hanging in
    /// `Loading`.
    pub async fn submit(&mut self, raw_input: &str) {
        let Some(ticket) = self.begin(raw_input) else {
            return;
        };

        let outcome = self.backend.fetch_forecast(ticket.horizon_days).await;
        self.apply(ticket, outcome);
    }

    /// Validate input and enter `Loading`. On validation failure the state
    /// becomes `Error` and no ticket is issued, so nothing is ever sent.
    pub fn begin(&mut self, raw_input: &str) -> Option<RequestTicket> {
        match validate::horizon(raw_input) {
            Ok(horizon_days) => {
                self.latest_seq += 1;
                let previous = self.carried_result();
                self.state = RequestState::Loading { previous };
                tracing::debug!(seq = self.latest_seq, horizon_days, "request issued");
                Some(RequestTicket { seq: self.latest_seq, horizon_days })
            }
            Err(err) => {
                self.fail(err.to_string());
                None
            }
        }
    }

    /// Resolve the fetch outcome for `ticket` into state.
    ///
    /// An outcome belonging to a superseded ticket is discarded, so responses
    /// only ever apply in submission order.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<RawResponse, ClientError>) {
        if ticket.seq != self.latest_seq {
            tracing::debug!(seq = ticket.seq, latest = self.latest_seq, "stale response discarded");
            return;
        }

        match outcome {
            Ok(response) if response.status.is_success() => {
                self.state = RequestState::Success(normalize::forecast(&response.body));
            }
            Ok(response) => {
                tracing::debug!(status = %response.status, "backend reported failure");
                let message = normalize::backend_error(&response.body)
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
                self.fail(message);
            }
            Err(ClientError::Network { reason }) => {
                tracing::warn!(%reason, "prediction request failed in transport");
                self.fail(NETWORK_ERROR_MESSAGE.to_string());
            }
            Err(err @ ClientError::Decode { .. }) => {
                // The raw body stays in the log, never in the banner.
                tracing::warn!(error = %err, "prediction response could not be decoded");
                self.fail(GENERIC_ERROR_MESSAGE.to_string());
            }
        }
    }

    fn fail(&mut self, message: String) {
        let previous = self.carried_result();
        self.state = RequestState::Error { message, previous };
    }

    /// Take the result currently on display, leaving the state momentarily
    /// `Idle` until the caller installs its replacement.
    fn carried_result(&mut self) -> Option<ForecastResult> {
        match std::mem::take(&mut self.state) {
            RequestState::Idle => None,
            RequestState::Loading { previous } => previous,
            RequestState::Success(result) => Some(result),
            RequestState::Error { previous, .. } => previous,
        }
    }
}
