// src/query.rs

use crate::domain::DealFilter;
use crate::errors::ServerError;
use url::form_urlencoded;

/// Which upload to show and how to filter it, as carried in the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DealsQuery {
    pub dataset: String,
    pub filter: DealFilter,
}

impl DealsQuery {
    /// Missing or unparsable thresholds fall back to the control defaults;
    /// out-of-range ones are clamped. Only the dataset id is required.
    pub fn parse(query: Option<&str>) -> Result<Self, ServerError> {
        let defaults = DealFilter::default();
        let mut dataset = None;
        let mut min_roi = defaults.min_roi;
        let mut min_cash_flow = defaults.min_cash_flow;
        let mut locations = Vec::new();

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            match key.as_ref() {
                "dataset" => dataset = Some(value.into_owned()),
                "min_roi" => min_roi = parse_number(&value).unwrap_or(min_roi),
                "min_cash_flow" => {
                    min_cash_flow = parse_number(&value).unwrap_or(min_cash_flow)
                }
                "location" if !value.trim().is_empty() => {
                    let loc = value.trim().to_string();
                    if !locations.contains(&loc) {
                        locations.push(loc);
                    }
                }
                _ => {}
            }
        }

        let dataset = dataset
            .filter(|d| !d.is_empty())
            .ok_or_else(|| ServerError::BadRequest("missing dataset id".into()))?;

        Ok(Self {
            dataset,
            filter: DealFilter {
                min_roi,
                min_cash_flow,
                locations,
            }
            .clamped(),
        })
    }

    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("dataset", &self.dataset)
            .append_pair("min_roi", &self.filter.min_roi.to_string())
            .append_pair("min_cash_flow", &self.filter.min_cash_flow.to_string());
        for loc in &self.filter.locations {
            out.append_pair("location", loc);
        }
        out.finish()
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
