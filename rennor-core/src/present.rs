//! Pure projections from normalized results to display-ready shapes.
//!
//! Idempotent and side-effect free; chart and stat widgets consume these
//! without any null-checking beyond "absent or present".

use crate::model::{ChartPoint, ComparisonPoint, ComparisonSeries, ForecastResult, SummaryStats};

/// Index the predictions as 1-based day/value chart rows.
///
/// An empty result yields an empty series, which consumers render as a
/// placeholder rather than an error.
pub fn chart_series(result: &ForecastResult) -> Vec<ChartPoint> {
    result
        .predictions
        .iter()
        .enumerate()
        .map(|(idx, &humidity)| ChartPoint { day: idx as u32 + 1, humidity })
        .collect()
}

/// Mean, max and min over a prediction sequence.
///
/// Undefined over zero elements, hence `None` for empty input instead of a
/// NaN or a division by zero.
pub fn summary_stats(values: &[f64]) -> Option<SummaryStats> {
    if values.is_empty() {
        return None;
    }

    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sum = 0.0;
    for &v in values {
        sum += v;
        max = max.max(v);
        min = min.min(v);
    }

    Some(SummaryStats { mean: sum / values.len() as f64, max, min })
}

/// Pair each past date with its actual and predicted value.
///
/// The value sequences may run short of the date sequence; missing indices
/// become `None` rather than truncating or panicking.
pub fn comparison_points(series: &ComparisonSeries) -> Vec<ComparisonPoint> {
    series
        .past_dates
        .iter()
        .enumerate()
        .map(|(idx, date)| ComparisonPoint {
            date: date.clone(),
            actual: series.actual_values.get(idx).copied(),
            predicted: series.predicted_values.get(idx).copied(),
        })
        .collect()
}
