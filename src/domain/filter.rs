// src/domain/filter.rs

use crate::domain::deal::EnrichedRecord;
use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const MIN_ROI_RANGE: RangeInclusive<f64> = 0.0..=20.0;
pub const MIN_CASH_FLOW_RANGE: RangeInclusive<f64> = -500.0..=1000.0;

/// Thresholds chosen in the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct DealFilter {
    pub min_roi: f64,
    pub min_cash_flow: f64,
    /// Empty means every location.
    pub locations: Vec<String>,
}

impl Default for DealFilter {
    fn default() -> Self {
        Self {
            min_roi: 5.0,
            min_cash_flow: 0.0,
            locations: Vec::new(),
        }
    }
}

impl DealFilter {
    /// Pull the thresholds back into the range the controls allow.
    pub fn clamped(mut self) -> Self {
        self.min_roi = clamp(self.min_roi, &MIN_ROI_RANGE);
        self.min_cash_flow = clamp(self.min_cash_flow, &MIN_CASH_FLOW_RANGE);
        self
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

/// Undervalued rows passing the thresholds, best deal score first.
///
/// Ties keep their upload order. Nothing here touches the records, so
/// who counts as undervalued never depends on the filter.
pub fn filter_deals<'a>(
    records: &'a [EnrichedRecord],
    filter: &DealFilter,
) -> Vec<&'a EnrichedRecord> {
    let wanted: HashSet<&str> = filter.locations.iter().map(String::as_str).collect();

    let mut matches: Vec<&EnrichedRecord> = records
        .iter()
        .filter(|r| r.undervalued)
        .filter(|r| r.annual_roi >= filter.min_roi)
        .filter(|r| r.monthly_cash_flow >= filter.min_cash_flow)
        .filter(|r| wanted.is_empty() || wanted.contains(r.location.as_str()))
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.deal_score.total_cmp(&a.deal_score));
    matches
}

/// Distinct non-empty locations, in the order they first appear.
pub fn locations(records: &[EnrichedRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.location.as_str())
        .filter(|loc| !loc.is_empty() && seen.insert(*loc))
        .map(str::to_string)
        .collect()
}
