use crate::domain::EnrichedRecord;
use crate::errors::ServerError;
use crate::spreadsheets::columns::{deal_cells, Cell, DEAL_COLUMNS};
use rust_xlsxwriter::{Format, Workbook};

pub fn export_deals_xlsx(deals: &[&EnrichedRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in DEAL_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::ExportError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, deal) in deals.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, cell) in deal_cells(deal).iter().enumerate() {
            let col = col as u16;
            let written = match cell {
                Cell::Text(s) => worksheet.write_string(r, col, *s),
                Cell::Number(n) => worksheet.write_number(r, col, *n),
            };
            written.map_err(|e| {
                ServerError::ExportError(format!(
                    "Failed to write '{}' for '{}': {e}",
                    DEAL_COLUMNS[col as usize], deal.property.address
                ))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::ExportError(format!("Failed to save workbook: {e}")))
}
