//! Common types used across the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown by the renderer before any prediction has run.
/// Never a real city; toggling it is a no-op.
pub const CITY_PLACEHOLDER: &str = "City Name";

/// Normalized city identity.
///
/// City identity is always derived from raw input, never parsed back out of
/// decorated display text: the normalization trims whitespace and strips the
/// star glyphs a renderer may attach to a favorited city name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    /// Normalize raw input into a city identity.
    ///
    /// Returns `None` for input that is empty after normalization or equals
    /// the placeholder sentinel.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize_city_name(raw);
        if normalized.is_empty() || normalized == CITY_PLACEHOLDER {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strip star glyphs and surrounding whitespace from a city name.
pub fn normalize_city_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\u{2605}' && *c != '\u{2606}')
        .collect::<String>()
        .trim()
        .to_string()
}

/// City chosen on the prediction form: either an entry from the select
/// control or the "custom" option with a free-text name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CitySelection {
    Listed(String),
    Custom(String),
}

/// Active color theme, persisted under browser-local storage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a persisted theme name; unknown values fall back to the default.
    pub fn from_code(code: &str) -> Theme {
        match code {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_id_strips_star_glyphs() {
        let id = CityId::new(" ★Bangkok☆ ").unwrap();
        assert_eq!(id.as_str(), "Bangkok");
    }

    #[test]
    fn test_city_id_rejects_empty_and_placeholder() {
        assert!(CityId::new("").is_none());
        assert!(CityId::new("   ").is_none());
        assert!(CityId::new("★☆").is_none());
        assert!(CityId::new("City Name").is_none());
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::from_code("dark"), Theme::Dark);
        assert_eq!(Theme::from_code("nonsense"), Theme::Light);
    }
}
