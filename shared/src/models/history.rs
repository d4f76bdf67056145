//! Prediction history models and statistics aggregation

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One logged past prediction outcome.
///
/// The log is owned by the server side; the client only reads it. The
/// timestamp is an opaque string passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub city: String,
    pub actual_temp: f64,
    pub predicted_temp: f64,
    /// Absolute difference between actual and predicted temperature
    pub error: f64,
    pub model_used: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

/// Summary metrics over the prediction log, recomputed fresh per request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HistoryStats {
    pub total_predictions: usize,
    pub avg_error: f64,
    pub min_error: f64,
    #[serde(default)]
    pub max_error: f64,
    pub cities_predicted: usize,
}

/// One row of the `/compare` endpoint's per-city accuracy table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonEntry {
    pub city: String,
    pub actual_temp: f64,
    pub predicted_temp: f64,
    pub error: f64,
}

/// Round to two decimal places, the precision used for error metrics.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate summary statistics over a history log.
///
/// Tolerates unsorted input and duplicate cities; an empty log yields all
/// zeros rather than dividing by zero. Distinct cities are counted by exact,
/// case-sensitive match.
pub fn aggregate_stats(records: &[HistoryRecord]) -> HistoryStats {
    if records.is_empty() {
        return HistoryStats::default();
    }

    let total = records.len();
    let sum: f64 = records.iter().map(|r| r.error).sum();
    let min = records.iter().map(|r| r.error).fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(|r| r.error)
        .fold(f64::NEG_INFINITY, f64::max);
    let cities: HashSet<&str> = records.iter().map(|r| r.city.as_str()).collect();

    HistoryStats {
        total_predictions: total,
        avg_error: round2(sum / total as f64),
        min_error: round2(min),
        max_error: round2(max),
        cities_predicted: cities.len(),
    }
}
