use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A validated request for an n-day humidity forecast.
///
/// Immutable once issued; serializes directly to the wire payload the
/// prediction service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastRequest {
    #[serde(rename = "dias_futuros")]
    pub horizon_days: u32,
}

/// Normalized outcome of one successful prediction call.
///
/// Owned by the session for the lifetime of one request/response cycle and
/// replaced wholesale on each new success, never mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastResult {
    /// Predicted relative humidity in percent, one entry per future day.
    pub predictions: Vec<f64>,
    /// Calendar dates matching `predictions`, when the service supplies them.
    pub forecast_dates: Vec<String>,
    pub metrics: Option<Metrics>,
    pub comparison: Option<ComparisonSeries>,
    /// Service-side generation time, when parseable.
    pub generated_at: Option<NaiveDateTime>,
}

/// Model accuracy metrics reported alongside a forecast.
///
/// All-or-nothing: a partially reported set is treated as absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
}

/// Historical actual-vs-predicted values used to visualize model accuracy.
///
/// The three sequences are index-aligned by intent, but the service does not
/// enforce equal lengths; consumers must treat missing indices of the value
/// sequences as absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonSeries {
    pub past_dates: Vec<String>,
    pub actual_values: Vec<f64>,
    pub predicted_values: Vec<f64>,
}

/// One chart row derived from [`ForecastResult::predictions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// 1-based future day index.
    pub day: u32,
    pub humidity: f64,
}

/// Aggregate statistics over a prediction sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// One aligned row of a comparison series.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPoint {
    pub date: String,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
}

/// Liveness report from the service's health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}
