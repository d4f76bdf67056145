//! Weather data models

use serde::{Deserialize, Serialize};

/// A point-in-time weather observation for a city.
///
/// Produced by the prediction endpoint; immutable once received and replaced
/// wholesale on each new prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    /// Lower-cased weather condition text, e.g. "scattered clouds"
    pub description: String,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i32,
    pub wind_speed: f64,
    pub pressure: i32,
    /// Air quality index on the 0-500 scale; 0 or absent means unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqi: Option<i32>,
    /// Visibility in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i32>,
    /// Cloud cover percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clouds: Option<i32>,
    /// Short provider icon code, e.g. "04d"
    pub icon: String,
}

impl WeatherSnapshot {
    /// AQI with the unknown sentinel collapsed to `None`.
    pub fn known_aqi(&self) -> Option<i32> {
        self.aqi.filter(|aqi| *aqi > 0)
    }

    /// EPA category for the snapshot's AQI, if known.
    pub fn aqi_category(&self) -> Option<AqiCategory> {
        self.known_aqi().map(AqiCategory::from_index)
    }
}

/// EPA air quality categories over the 0-500 AQI scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthyForSensitiveGroups,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// 301+
    Hazardous,
}

impl AqiCategory {
    pub fn from_index(aqi: i32) -> Self {
        match aqi {
            i32::MIN..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiCategory::Good => write!(f, "Good"),
            AqiCategory::Moderate => write!(f, "Moderate"),
            AqiCategory::UnhealthyForSensitiveGroups => write!(f, "Unhealthy (SG)"),
            AqiCategory::Unhealthy => write!(f, "Unhealthy"),
            AqiCategory::VeryUnhealthy => write!(f, "Very Unhealthy"),
            AqiCategory::Hazardous => write!(f, "Hazardous"),
        }
    }
}
