//! Weather alert rule engine
//!
//! Maps a weather snapshot to the ordered list of threshold alerts it
//! triggers. Evaluation is pure and stateless: each call looks only at the
//! snapshot it is given, so repeated identical predictions produce repeated
//! identical alerts.

use serde::{Deserialize, Serialize};

use super::WeatherSnapshot;

/// Temperature above which the heat rule fires (°C)
pub const HEAT_THRESHOLD_C: f64 = 40.0;
/// Temperature below which the cold rule fires (°C)
pub const COLD_THRESHOLD_C: f64 = 10.0;
/// Wind speed above which the wind rule fires (m/s)
pub const WIND_THRESHOLD_MPS: f64 = 15.0;
/// Visibility below which the visibility rule fires (meters)
pub const VISIBILITY_THRESHOLD_M: i32 = 1000;
/// AQI above which the air quality rule fires
pub const AQI_THRESHOLD: i32 = 150;

/// A derived warning triggered when a snapshot crosses a fixed threshold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub alert_type: AlertType,
    pub message: String,
}

/// Alert kinds, in evaluation order. Severity is implied by the type; the
/// renderer styles each kind on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Heat,
    Cold,
    Wind,
    Visibility,
    Aqi,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Heat => write!(f, "heat"),
            AlertType::Cold => write!(f, "cold"),
            AlertType::Wind => write!(f, "wind"),
            AlertType::Visibility => write!(f, "visibility"),
            AlertType::Aqi => write!(f, "aqi"),
        }
    }
}

/// Evaluate all alert rules against a snapshot.
///
/// Rules are checked in a fixed order and independently of each other; a
/// snapshot triggers at most one alert per rule. All comparisons are strict,
/// so a value sitting exactly on a threshold does not fire. Missing optional
/// fields never fire and never fail.
pub fn evaluate_alerts(snapshot: &WeatherSnapshot) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if snapshot.temp > HEAT_THRESHOLD_C {
        alerts.push(Alert {
            alert_type: AlertType::Heat,
            message: format!(
                "Heat Warning: Temperature is {:.1}°C - Stay hydrated!",
                snapshot.temp
            ),
        });
    }

    if snapshot.temp < COLD_THRESHOLD_C {
        alerts.push(Alert {
            alert_type: AlertType::Cold,
            message: format!(
                "Cold Alert: Temperature is {:.1}°C - Dress warmly!",
                snapshot.temp
            ),
        });
    }

    if snapshot.wind_speed > WIND_THRESHOLD_MPS {
        alerts.push(Alert {
            alert_type: AlertType::Wind,
            message: format!(
                "Strong Wind Warning: {} m/s - Avoid outdoor activities!",
                snapshot.wind_speed
            ),
        });
    }

    if let Some(visibility) = snapshot.visibility {
        if visibility < VISIBILITY_THRESHOLD_M {
            alerts.push(Alert {
                alert_type: AlertType::Visibility,
                message: format!("Low Visibility: {}m - Drive carefully!", visibility),
            });
        }
    }

    if let Some(aqi) = snapshot.known_aqi() {
        if aqi > AQI_THRESHOLD {
            alerts.push(Alert {
                alert_type: AlertType::Aqi,
                message: format!("Poor Air Quality (AQI: {}) - Avoid outdoor exposure!", aqi),
            });
        }
    }

    alerts
}
