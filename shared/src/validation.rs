//! Validation of prediction form input
//!
//! The form offers a select control of known cities plus a "custom" option
//! that reveals a free-text field. Validation resolves the pair into a
//! normalized city identity before any request is allowed out.

use crate::types::{CityId, CitySelection};

/// Select-control value that switches the form to free-text input
pub const CUSTOM_CITY_OPTION: &str = "custom";

/// Build a selection from the raw form fields.
pub fn selection_from_form(selected: &str, custom_text: &str) -> CitySelection {
    if selected == CUSTOM_CITY_OPTION {
        CitySelection::Custom(custom_text.to_string())
    } else {
        CitySelection::Listed(selected.to_string())
    }
}

/// Resolve a selection into the city to predict for.
///
/// The custom free-text value substitutes for the selection when the custom
/// option is chosen; either way the result must be a non-empty,
/// non-placeholder city name.
pub fn resolve_city(selection: &CitySelection) -> Result<CityId, &'static str> {
    let raw = match selection {
        CitySelection::Listed(name) => name,
        CitySelection::Custom(text) => text,
    };
    CityId::new(raw).ok_or(match selection {
        CitySelection::Listed(_) => "City is required",
        CitySelection::Custom(_) => "Custom city name is required",
    })
}
