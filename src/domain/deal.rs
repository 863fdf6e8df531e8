// src/domain/deal.rs

use crate::config::DealConfig;
use crate::domain::error::DealError;
use crate::domain::logic::{label_deal, DealLabel};
use crate::domain::property::PropertyRecord;
use rand::Rng;

/// A listing with its simulated rental numbers and BRRR scenario.
///
/// Everything relative (`undervalued`, `deal_score`) is measured against
/// the mean £/m² of the whole upload, never against a filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub property: PropertyRecord,

    /// Simulated gross yield in percent. Not a real estimate.
    pub estimated_yield: f64,
    pub estimated_rent: f64,
    pub price_per_area: f64,

    pub undervalued: bool,
    pub deal_score: f64,
    pub monthly_cash_flow: f64,
    pub annual_roi: f64,

    // BRRR refinance scenario
    pub refinance_value: f64,
    pub new_mortgage: f64,
    pub cash_pulled_out: f64,

    pub maps_link: String,
    /// Town after the last comma of the address, empty if there is none.
    pub location: String,
    pub label: DealLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDataset {
    pub records: Vec<EnrichedRecord>,
    pub mean_price_per_area: f64,
}

impl EnrichedDataset {
    /// Uploaded columns beyond the required three, in upload order.
    /// Every row of a file carries the same set.
    pub fn extra_headers(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.property.extra.iter().map(|(h, _)| h.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Per-row numbers that don't depend on the rest of the dataset.
struct RowBasics {
    estimated_yield: f64,
    estimated_rent: f64,
    price_per_area: f64,
}

/// Build the enriched dataset in input order.
///
/// Yields are drawn from `rng`, one per row; pass a seeded RNG to get the
/// same deals for the same upload.
pub fn enrich<R: Rng + ?Sized>(
    rows: &[PropertyRecord],
    cfg: &DealConfig,
    rng: &mut R,
) -> Result<EnrichedDataset, DealError> {
    if rows.is_empty() {
        return Err(DealError::EmptyDataset);
    }

    let basics: Vec<RowBasics> = rows
        .iter()
        .map(|row| {
            let estimated_yield = round_to(rng.gen_range(cfg.yield_min..=cfg.yield_max), 2);
            RowBasics {
                estimated_yield,
                estimated_rent: row.price * estimated_yield / 100.0 / 12.0,
                price_per_area: row.price / row.area,
            }
        })
        .collect();

    let mean_price_per_area =
        basics.iter().map(|b| b.price_per_area).sum::<f64>() / basics.len() as f64;

    let records = rows
        .iter()
        .zip(basics)
        .map(|(row, basics)| build_record(row, basics, mean_price_per_area, cfg))
        .collect();

    Ok(EnrichedDataset {
        records,
        mean_price_per_area,
    })
}

fn build_record(
    row: &PropertyRecord,
    basics: RowBasics,
    mean_price_per_area: f64,
    cfg: &DealConfig,
) -> EnrichedRecord {
    let ppa = basics.price_per_area;

    let undervalued = ppa < mean_price_per_area * cfg.undervalued_ratio;
    let deal_score = round_to(
        ((mean_price_per_area - ppa) / mean_price_per_area * 100.0).max(0.0),
        1,
    );
    let monthly_cash_flow = round_to(basics.estimated_rent - cfg.monthly_cost, 2);
    let annual_roi = round_to(monthly_cash_flow * 12.0 / row.price * 100.0, 2);

    let refinance_value = row.price * cfg.refinance_uplift;
    let new_mortgage = refinance_value * cfg.loan_to_value;
    let cash_pulled_out = round_to(
        (new_mortgage - row.price * cfg.loan_to_value).max(0.0),
        2,
    );

    EnrichedRecord {
        property: row.clone(),
        estimated_yield: basics.estimated_yield,
        estimated_rent: basics.estimated_rent,
        price_per_area: ppa,
        undervalued,
        deal_score,
        monthly_cash_flow,
        annual_roi,
        refinance_value,
        new_mortgage,
        cash_pulled_out,
        maps_link: maps_link(&cfg.maps_search_url, &row.address),
        location: location(&row.address).to_string(),
        label: label_deal(undervalued, annual_roi, monthly_cash_flow, cfg),
    }
}

pub fn maps_link(search_url: &str, address: &str) -> String {
    format!("{search_url}{}", address.replace(' ', "+"))
}

pub fn location(address: &str) -> &str {
    address
        .rsplit_once(',')
        .map(|(_, town)| town.trim())
        .unwrap_or("")
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
