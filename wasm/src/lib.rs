//! WebAssembly module for the Weather Prediction Dashboard
//!
//! Provides client-side computation for:
//! - Weather alert evaluation
//! - History statistics aggregation
//! - CSV export of the prediction log
//! - Favorites membership and city name handling

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::export::*;
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Evaluate weather alerts for a current-conditions snapshot.
///
/// Takes the snapshot as JSON and returns the triggered alerts as a JSON
/// array, in severity order.
#[wasm_bindgen]
pub fn check_weather_alerts(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot: WeatherSnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))?;

    let alerts = evaluate_alerts(&snapshot);
    serde_json::to_string(&alerts).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Aggregate summary statistics over a JSON array of history records.
#[wasm_bindgen]
pub fn calculate_history_stats(history_json: &str) -> Result<String, JsValue> {
    let records: Vec<HistoryRecord> = serde_json::from_str(history_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid history JSON: {}", e)))?;

    let stats = aggregate_stats(&records);
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Serialize a JSON array of history records to the downloadable CSV.
///
/// An empty log is refused with the message the dashboard shows the user.
#[wasm_bindgen]
pub fn export_history_csv(history_json: &str) -> Result<String, JsValue> {
    let records: Vec<HistoryRecord> = serde_json::from_str(history_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid history JSON: {}", e)))?;

    if records.is_empty() {
        return Err(JsValue::from_str("No prediction history to export!"));
    }
    history_to_csv(&records).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Name of the file the exported CSV should be saved as
#[wasm_bindgen]
pub fn export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

/// Flip membership of `city` in a JSON array of favorite names, returning
/// the updated array. An empty or placeholder name leaves it unchanged.
#[wasm_bindgen]
pub fn toggle_favorite_city(favorites_json: &str, city: &str) -> Result<String, JsValue> {
    let names: Vec<String> = serde_json::from_str(favorites_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid favorites JSON: {}", e)))?;

    let mut set = FavoriteSet::from_names(names);
    if let Some(id) = CityId::new(city) {
        set.toggle(&id);
    }
    serde_json::to_string(&set).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Whether `city` is in a JSON array of favorite names
#[wasm_bindgen]
pub fn is_favorite_city(favorites_json: &str, city: &str) -> bool {
    let Ok(names) = serde_json::from_str::<Vec<String>>(favorites_json) else {
        return false;
    };
    let set = FavoriteSet::from_names(names);
    match CityId::new(city) {
        Some(id) => set.contains(&id),
        None => false,
    }
}

/// Strip star glyphs and surrounding whitespace from a displayed city name
#[wasm_bindgen]
pub fn normalize_city(name: &str) -> String {
    normalize_city_name(name)
}

/// Resolve the prediction form's dropdown/custom pair to a city name.
///
/// Errors carry the exact message the form should display.
#[wasm_bindgen]
pub fn resolve_form_city(selected: &str, custom: &str) -> Result<String, JsValue> {
    let selection = selection_from_form(selected, custom);
    resolve_city(&selection)
        .map(|city| city.as_str().to_string())
        .map_err(JsValue::from_str)
}

/// EPA category label for an air quality index value
#[wasm_bindgen]
pub fn classify_aqi(index: i32) -> String {
    AqiCategory::from_index(index).to_string()
}

/// The theme that follows `current`, as its storage code
#[wasm_bindgen]
pub fn toggled_theme(current: &str) -> String {
    Theme::from_code(current).toggled().code().to_string()
}
