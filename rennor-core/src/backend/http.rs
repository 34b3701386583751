use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use serde_json::Value;

use crate::{
    config::Config,
    error::ClientError,
    model::{ForecastRequest, ServiceHealth},
};

use super::{PredictionBackend, RawResponse};

/// reqwest-backed client for the RENNOR prediction service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    /// Pinned base URL; when `None` the environment is consulted per call.
    pinned: Option<Config>,
}

impl HttpBackend {
    /// Client that resolves the base URL from the environment on every call.
    pub fn new() -> Self {
        Self { http: Client::new(), pinned: None }
    }

    /// Client with a fixed configuration, bypassing environment resolution.
    pub fn with_config(config: Config) -> Self {
        Self { http: Client::new(), pinned: Some(config) }
    }

    fn config(&self) -> Config {
        self.pinned.clone().unwrap_or_else(Config::from_env)
    }

    /// Query the service's health endpoint.
    pub async fn health(&self) -> Result<ServiceHealth, ClientError> {
        let url = self.config().health_endpoint();

        let res = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Network { reason: e.to_string() })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ClientError::Network { reason: e.to_string() })?;

        serde_json::from_str(&body).map_err(|_| ClientError::Decode { status, raw: body })
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionBackend for HttpBackend {
    async fn fetch_forecast(&self, horizon_days: u32) -> Result<RawResponse, ClientError> {
        let url = self.config().prediction_endpoint();
        tracing::debug!(%url, horizon_days, "requesting forecast");

        let res = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&ForecastRequest { horizon_days })
            .send()
            .await
            .map_err(|e| ClientError::Network { reason: e.to_string() })?;

        let status = res.status();

        // The body is read exactly once; any status may carry a payload.
        let body = res
            .text()
            .await
            .map_err(|e| ClientError::Network { reason: e.to_string() })?;

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(RawResponse { status, body: value }),
            Err(_) => {
                tracing::warn!(
                    %status,
                    body = %truncate_body(&body),
                    "non-JSON response from prediction service"
                );
                Err(ClientError::Decode { status, raw: body })
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
