//! History view and export flows

use shared::{history_to_csv, HistoryRecord, EXPORT_FILE_NAME};

use crate::error::{ClientError, ClientResult};

/// Serialize history records for download as `weather_predictions.csv`.
///
/// An empty history is refused with `EmptyExport` rather than producing a
/// header-only file; the serializer itself would happily emit one, so the
/// refusal is this flow's decision.
pub fn export_history(records: &[HistoryRecord]) -> ClientResult<(&'static str, String)> {
    if records.is_empty() {
        return Err(ClientError::EmptyExport);
    }
    let csv = history_to_csv(records)?;
    Ok((EXPORT_FILE_NAME, csv))
}
