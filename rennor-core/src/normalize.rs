//! Tolerant reshaping of raw service responses.
//!
//! Decoding failures are handled strictly at the HTTP layer; by the time a
//! payload reaches this module the goal is maximal tolerance. Every function
//! here is total: a malformed field collapses to its empty/absent default
//! instead of producing an error.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::model::{ComparisonSeries, ForecastResult, Metrics};

/// Reshape a success payload into a [`ForecastResult`].
pub fn forecast(body: &Value) -> ForecastResult {
    ForecastResult {
        predictions: number_seq(body.get("predicciones")),
        forecast_dates: string_seq(body.get("fechas")),
        metrics: metrics(body.get("metricas")),
        comparison: comparison(body.get("datos_comparacion")),
        generated_at: timestamp(body.get("timestamp")),
    }
}

/// Backend-supplied error message of a failure payload, if any.
pub fn backend_error(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn number_seq(value: Option<&Value>) -> Vec<f64> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

fn string_seq(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// All four metric fields must be numeric, otherwise the whole set is absent;
/// the display layer renders metrics all-or-nothing.
fn metrics(value: Option<&Value>) -> Option<Metrics> {
    let value = value?;

    Some(Metrics {
        mse: value.get("mse").and_then(Value::as_f64)?,
        rmse: value.get("rmse").and_then(Value::as_f64)?,
        mae: value.get("mae").and_then(Value::as_f64)?,
        r_squared: value.get("r_squared").and_then(Value::as_f64)?,
    })
}

/// Present only when the service supplied a non-empty `fechas_pasadas`;
/// consumers skip comparison rendering entirely otherwise.
fn comparison(value: Option<&Value>) -> Option<ComparisonSeries> {
    let value = value?;

    let past_dates = string_seq(value.get("fechas_pasadas"));
    if past_dates.is_empty() {
        return None;
    }

    Some(ComparisonSeries {
        past_dates,
        actual_values: number_seq(value.get("valores_reales")),
        predicted_values: number_seq(value.get("valores_predichos")),
    })
}

// The service emits `datetime.now().isoformat()`, which carries no offset;
// an offset-bearing timestamp is accepted too.
fn timestamp(value: Option<&Value>) -> Option<NaiveDateTime> {
    let text = value?.as_str()?;

    text.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.naive_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_empty_result() {
        let result = forecast(&json!({}));

        assert!(result.predictions.is_empty());
        assert!(result.forecast_dates.is_empty());
        assert!(result.metrics.is_none());
        assert!(result.comparison.is_none());
        assert!(result.generated_at.is_none());
    }

    #[test]
    fn full_payload_is_reshaped() {
        let body = json!({
            "success": true,
            "predicciones": [72.1, 70.4, 69.9],
            "dias": 3,
            "fechas": ["2026-08-07", "2026-08-08", "2026-08-09"],
            "metricas": { "mse": 10.5, "rmse": 3.24, "mae": 2.8, "r_squared": 0.91 },
            "datos_comparacion": {
                "fechas_pasadas": ["2026-08-01", "2026-08-02"],
                "valores_reales": [71.0, 73.5],
                "valores_predichos": [70.2, 72.9]
            },
            "timestamp": "2026-08-06T10:15:30.123456"
        });

        let result = forecast(&body);

        assert_eq!(result.predictions, vec![72.1, 70.4, 69.9]);
        assert_eq!(result.forecast_dates.len(), 3);

        let metrics = result.metrics.expect("metrics present");
        assert_eq!(metrics.rmse, 3.24);
        assert_eq!(metrics.r_squared, 0.91);

        let comparison = result.comparison.expect("comparison present");
        assert_eq!(comparison.past_dates.len(), 2);
        assert_eq!(comparison.predicted_values, vec![70.2, 72.9]);

        assert!(result.generated_at.is_some());
    }

    #[test]
    fn is_idempotent() {
        let body = json!({
            "predicciones": [50.0, 51.5],
            "metricas": { "mse": 1.0 },
            "timestamp": "2026-08-06T10:15:30"
        });

        assert_eq!(forecast(&body), forecast(&body));
    }

    #[test]
    fn partial_metrics_collapse_to_absent() {
        let body = json!({ "metricas": { "mse": 1.0, "rmse": 1.0, "mae": 1.0 } });
        assert!(forecast(&body).metrics.is_none());

        let body = json!({
            "metricas": { "mse": 1.0, "rmse": 1.0, "mae": 1.0, "r_squared": "high" }
        });
        assert!(forecast(&body).metrics.is_none());
    }

    #[test]
    fn malformed_predictions_collapse_to_empty() {
        assert!(forecast(&json!({ "predicciones": "soon" })).predictions.is_empty());
        assert!(forecast(&json!({ "predicciones": null })).predictions.is_empty());

        // Junk entries are skipped, not fatal.
        let body = json!({ "predicciones": [60.0, null, "x", 61.5] });
        assert_eq!(forecast(&body).predictions, vec![60.0, 61.5]);
    }

    #[test]
    fn comparison_requires_past_dates() {
        let body = json!({
            "datos_comparacion": { "fechas_pasadas": [], "valores_reales": [1.0] }
        });
        assert!(forecast(&body).comparison.is_none());

        let body = json!({ "datos_comparacion": { "fechas_pasadas": ["2026-08-01"] } });
        let comparison = forecast(&body).comparison.expect("comparison present");
        assert!(comparison.actual_values.is_empty());
        assert!(comparison.predicted_values.is_empty());
    }

    #[test]
    fn timestamp_accepts_offset_and_naive_forms() {
        let body = json!({ "timestamp": "2026-08-06T10:15:30+00:00" });
        assert!(forecast(&body).generated_at.is_some());

        let body = json!({ "timestamp": "yesterday" });
        assert!(forecast(&body).generated_at.is_none());
    }

    #[test]
    fn backend_error_extracts_non_empty_message() {
        let failure = json!({ "success": false, "error": "modelo no disponible" });
        assert_eq!(backend_error(&failure).as_deref(), Some("modelo no disponible"));

        assert_eq!(backend_error(&json!({ "error": "  " })), None);
        assert_eq!(backend_error(&json!({ "error": 500 })), None);
        assert_eq!(backend_error(&json!({})), None);
    }
}
