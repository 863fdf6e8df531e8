// src/domain/property.rs

use crate::domain::error::DealError;
use csv::{ReaderBuilder, StringRecord, Trim};

pub const ADDRESS_COLUMN: &str = "Address";
pub const PRICE_COLUMN: &str = "Price (£)";
pub const AREA_COLUMN: &str = "Area (m²)";

/// One listing as uploaded. Columns we don't use are carried along in
/// `extra`, in their original header order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub address: String,
    pub price: f64,
    pub area: f64,
    pub extra: Vec<(String, String)>,
}

#[cfg(test)]
impl PropertyRecord {
    pub fn new(address: impl Into<String>, price: f64, area: f64) -> Self {
        Self {
            address: address.into(),
            price,
            area,
            extra: Vec::new(),
        }
    }
}

/// Column positions resolved from the header row.
struct Columns {
    address: usize,
    price: usize,
    area: usize,
    headers: Vec<String>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, DealError> {
        // Spreadsheet exports often lead with a BOM.
        let headers: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DealError::MalformedInput(format!("missing column '{name}'")))
        };

        Ok(Self {
            address: find(ADDRESS_COLUMN)?,
            price: find(PRICE_COLUMN)?,
            area: find(AREA_COLUMN)?,
            headers,
        })
    }

    fn is_required(&self, idx: usize) -> bool {
        idx == self.address || idx == self.price || idx == self.area
    }
}

/// Parse an uploaded CSV into property records.
///
/// Rows with a non-numeric price or area are rejected rather than skipped.
/// A zero price or area would make £/m² and ROI undefined, so those are
/// rejected as well.
pub fn load_csv(bytes: &[u8]) -> Result<Vec<PropertyRecord>, DealError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DealError::EmptyDataset);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| DealError::MalformedInput(format!("unreadable header row: {e}")))?;
    let columns = Columns::from_headers(headers)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line = i + 1;
        let record =
            result.map_err(|e| DealError::MalformedInput(format!("row {line}: {e}")))?;
        rows.push(parse_row(&columns, &record, line)?);
    }

    if rows.is_empty() {
        return Err(DealError::EmptyDataset);
    }

    Ok(rows)
}

fn parse_row(
    columns: &Columns,
    record: &StringRecord,
    line: usize,
) -> Result<PropertyRecord, DealError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let price = parse_number(field(columns.price), PRICE_COLUMN, line)?;
    let area = parse_number(field(columns.area), AREA_COLUMN, line)?;

    let extra = columns
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !columns.is_required(*idx))
        .map(|(idx, header)| (header.clone(), field(idx).to_string()))
        .collect();

    Ok(PropertyRecord {
        address: field(columns.address).to_string(),
        price,
        area,
        extra,
    })
}

fn parse_number(raw: &str, column: &str, line: usize) -> Result<f64, DealError> {
    let value: f64 = raw.parse().map_err(|_| {
        DealError::MalformedInput(format!(
            "row {line}: '{column}' value '{raw}' is not a number"
        ))
    })?;

    if !value.is_finite() || value == 0.0 {
        return Err(DealError::MalformedInput(format!(
            "row {line}: '{column}' must be a non-zero number, got '{raw}'"
        )));
    }

    Ok(value)
}
