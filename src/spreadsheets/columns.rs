use crate::domain::EnrichedRecord;

/// Columns of the deals table, in display order. The XLSX download uses
/// the same set.
pub const DEAL_COLUMNS: [&str; 10] = [
    "Deal",
    "Address",
    "Price (£)",
    "Area (m²)",
    "£/m2",
    "Estimated Rent (£)",
    "Monthly Cash Flow (£)",
    "Annual ROI (%)",
    "Cash Pulled Out (£)",
    "Google Maps",
];

/// Required upload columns, first in the enriched export.
const INPUT_COLUMNS: [&str; 3] = ["Address", "Price (£)", "Area (m²)"];

/// Derived columns appended after the uploaded ones in the enriched export.
const DERIVED_COLUMNS: [&str; 13] = [
    "Estimated Yield (%)",
    "Estimated Rent (£)",
    "£/m2",
    "Undervalued",
    "Deal Score",
    "Monthly Cash Flow (£)",
    "Annual ROI (%)",
    "Refinance Value (£)",
    "New Mortgage (£)",
    "Cash Pulled Out (£)",
    "Google Maps",
    "Location",
    "Deal",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

impl Cell<'_> {
    pub fn to_text(self) -> String {
        match self {
            Cell::Text(s) => s.to_string(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

pub fn deal_cells(r: &EnrichedRecord) -> [Cell<'_>; 10] {
    [
        Cell::Text(r.label.badge()),
        Cell::Text(&r.property.address),
        Cell::Number(r.property.price),
        Cell::Number(r.property.area),
        Cell::Number(r.price_per_area),
        Cell::Number(r.estimated_rent),
        Cell::Number(r.monthly_cash_flow),
        Cell::Number(r.annual_roi),
        Cell::Number(r.cash_pulled_out),
        Cell::Text(&r.maps_link),
    ]
}

/// Header of the enriched export: the uploaded columns followed by every
/// derived field.
pub fn enriched_header<'a>(extra_headers: &[&'a str]) -> Vec<&'a str> {
    INPUT_COLUMNS
        .iter()
        .copied()
        .chain(extra_headers.iter().copied())
        .chain(DERIVED_COLUMNS.iter().copied())
        .collect()
}

/// One row of the enriched export, matching [`enriched_header`].
///
/// Extra values are looked up by header, so a row missing one gets a blank.
pub fn enriched_row<'a>(r: &'a EnrichedRecord, extra_headers: &[&str]) -> Vec<Cell<'a>> {
    let mut row = vec![
        Cell::Text(&r.property.address),
        Cell::Number(r.property.price),
        Cell::Number(r.property.area),
    ];

    row.extend(extra_headers.iter().map(|header| {
        let value = r
            .property
            .extra
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
            .unwrap_or("");
        Cell::Text(value)
    }));

    row.extend([
        Cell::Number(r.estimated_yield),
        Cell::Number(r.estimated_rent),
        Cell::Number(r.price_per_area),
        Cell::Text(if r.undervalued { "true" } else { "false" }),
        Cell::Number(r.deal_score),
        Cell::Number(r.monthly_cash_flow),
        Cell::Number(r.annual_roi),
        Cell::Number(r.refinance_value),
        Cell::Number(r.new_mortgage),
        Cell::Number(r.cash_pulled_out),
        Cell::Text(&r.maps_link),
        Cell::Text(&r.location),
        Cell::Text(r.label.badge()),
    ]);
    row
}
