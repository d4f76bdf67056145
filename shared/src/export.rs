//! CSV export of the prediction history

use thiserror::Error;

use crate::models::HistoryRecord;

/// File name the renderer gives the downloaded artifact
pub const EXPORT_FILE_NAME: &str = "weather_predictions.csv";

/// Fixed column headers of the export, in order
pub const EXPORT_HEADERS: [&str; 6] = [
    "City",
    "Actual Temp (°C)",
    "Predicted Temp (°C)",
    "Error (°C)",
    "Model",
    "Timestamp",
];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize history records to CSV text.
///
/// Rows follow the input order. Temperatures are written with one decimal,
/// errors with two, the model name upper-cased, and the timestamp verbatim.
/// Fields containing the delimiter, quotes, or line breaks are quoted by the
/// writer. An empty input yields a header-only document; refusing to export
/// an empty history is the caller's decision, not this function's.
pub fn history_to_csv(records: &[HistoryRecord]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(EXPORT_HEADERS)?;

    for record in records {
        wtr.write_record([
            record.city.clone(),
            format!("{:.1}", record.actual_temp),
            format!("{:.1}", record.predicted_temp),
            format!("{:.2}", record.error),
            record.model_used.to_uppercase(),
            record.timestamp.clone(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}
