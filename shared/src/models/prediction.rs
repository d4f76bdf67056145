//! Prediction result models returned by the `/predict` endpoint

use serde::{Deserialize, Serialize};

use super::WeatherSnapshot;

/// Full payload of a successful prediction request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub city_data: WeatherSnapshot,
    pub predicted_temp: f64,
    pub actual_temp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ModelMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<ForecastDay>>,
    /// Name of the model whose output was selected, e.g. "rf"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_model: Option<String>,
}

/// Quality metrics for the two regression models behind the endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelMetrics {
    pub lr: ModelScores,
    pub rf: ModelScores,
}

/// Scores for a single model; absent when the model was not evaluated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ModelScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mse: Option<f64>,
}

/// One day of the five-day forecast strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub day_name: String,
    pub temp: f64,
    pub description: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_result_round_trips_without_optionals() {
        let json = r#"{
            "city_data": {
                "city": "Chiang Mai",
                "description": "few clouds",
                "temp": 28.4,
                "feels_like": 30.1,
                "humidity": 64,
                "wind_speed": 2.1,
                "pressure": 1009,
                "icon": "02d"
            },
            "predicted_temp": 27.9,
            "actual_temp": 28.4
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert!(result.metrics.is_none());
        assert!(result.forecast.is_none());
        assert!(result.best_model.is_none());
        assert!((result.predicted_temp - 27.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metrics_with_partial_scores() {
        let json = r#"{"lr": {"r2": 0.91}, "rf": {"r2": 0.95, "mse": 1.2}}"#;
        let metrics: ModelMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.lr.mse, None);
        assert_eq!(metrics.rf.mse, Some(1.2));
    }
}
