use crate::domain::EnrichedRecord;
use crate::errors::ServerError;
use crate::spreadsheets::columns::{enriched_header, enriched_row};
use csv::Writer;

/// The filtered deals as UTF-8 CSV, rows in the order given.
///
/// Every uploaded column is kept, followed by all derived fields, so the
/// file carries more than the on-screen table.
pub fn export_deals_csv(
    deals: &[&EnrichedRecord],
    extra_headers: &[&str],
) -> Result<Vec<u8>, ServerError> {
    let mut writer = Writer::from_writer(Vec::new());

    writer
        .write_record(enriched_header(extra_headers))
        .map_err(|e| ServerError::ExportError(format!("Failed to write header: {e}")))?;

    for deal in deals {
        let row: Vec<String> = enriched_row(deal, extra_headers)
            .into_iter()
            .map(|cell| cell.to_text())
            .collect();
        writer.write_record(&row).map_err(|e| {
            ServerError::ExportError(format!(
                "Failed to write row for '{}': {e}",
                deal.property.address
            ))
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| ServerError::ExportError(format!("Failed to flush CSV: {e}")))
}
