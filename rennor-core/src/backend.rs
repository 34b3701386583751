use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ClientError;

pub mod http;

pub use http::HttpBackend;

/// Decoded-but-unshaped response from the prediction service.
///
/// The HTTP status is forwarded verbatim so the session can tell
/// backend-reported failures (4xx/5xx) from transport failures, and the body
/// is whatever JSON the service produced, shaped or not.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Seam to the remote forecasting service.
///
/// One outbound call per invocation, no retries at this layer; a retrying
/// decorator can wrap an implementor if a policy is ever wanted. Every
/// failure mode must come back as a typed [`ClientError`], never a panic.
#[async_trait]
pub trait PredictionBackend: Send + Sync + Debug {
    async fn fetch_forecast(&self, horizon_days: u32) -> Result<RawResponse, ClientError>;
}
