use std::env;

/// Environment variable overriding the prediction service base URL.
pub const BASE_URL_ENV: &str = "RENNOR_BACKEND_URL";

/// Base URL of a locally running prediction service, used when the
/// environment does not say otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const PREDICTION_PATH: &str = "/api/prediccion";
const HEALTH_PATH: &str = "/api/health";

/// Runtime configuration for the prediction service client.
///
/// Resolution is cheap and repeated per request, so operators can repoint a
/// running client through the environment without a rebuild. No configuration
/// is persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Resolve from the environment, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }

    /// Full URL of the prediction endpoint.
    pub fn prediction_endpoint(&self) -> String {
        self.join(PREDICTION_PATH)
    }

    /// Full URL of the health endpoint.
    pub fn health_endpoint(&self) -> String {
        self.join(HEALTH_PATH)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}
