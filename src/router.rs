use crate::domain::{filter_deals, locations, EnrichedDataset};
use crate::errors::ServerError;
use crate::query::DealsQuery;
use crate::responses::{csv_response, html_response, see_other, xlsx_response, ResultResp};
use crate::spreadsheets::{export_deals_csv, export_deals_xlsx, EXPORT_BASENAME};
use crate::state::AppState;
use crate::templates::pages::{deals_page, home_page, DealsVm};
use astra::Request;
use std::io::Read;
use std::sync::Arc;
use tracing::info;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page()),
        ("POST", "/upload") => upload(&mut req, state),
        ("GET", "/deals") => show_deals(&req, state),
        ("GET", "/deals/export.csv") => export_csv(&req, state),
        ("GET", "/deals/export.xlsx") => export_xlsx(&req, state),
        _ => Err(ServerError::NotFound),
    }
}

/// The request body is the CSV file itself.
fn upload(req: &mut Request, state: &AppState) -> ResultResp {
    let limit = state.config.server.max_upload_bytes;
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read upload: {e}")))?;

    if bytes.len() > limit {
        return Err(ServerError::BadRequest(format!(
            "Upload is larger than {limit} bytes"
        )));
    }

    let (id, dataset) = state.datasets.get_or_enrich(&bytes)?;
    info!(dataset = %id, bytes = bytes.len(), rows = dataset.records.len(), "upload accepted");

    let query = DealsQuery {
        dataset: id,
        filter: Default::default(),
    };
    see_other(&format!("/deals?{}", query.to_query_string()))
}

fn lookup(
    req: &Request,
    state: &AppState,
) -> Result<(DealsQuery, Arc<EnrichedDataset>), ServerError> {
    let query = DealsQuery::parse(req.uri().query())?;
    let dataset = state
        .datasets
        .get(&query.dataset)
        .ok_or(ServerError::NotFound)?;
    Ok((query, dataset))
}

fn show_deals(req: &Request, state: &AppState) -> ResultResp {
    let (query, dataset) = lookup(req, state)?;
    let deals = filter_deals(&dataset.records, &query.filter);
    let all_locations = locations(&dataset.records);

    info!(dataset = %query.dataset, matches = deals.len(), "filtered deals");

    html_response(deals_page(&DealsVm {
        query: &query,
        locations: &all_locations,
        deals: &deals,
        total_rows: dataset.records.len(),
        mean_price_per_area: dataset.mean_price_per_area,
    }))
}

fn export_csv(req: &Request, state: &AppState) -> ResultResp {
    let (query, dataset) = lookup(req, state)?;
    let deals = filter_deals(&dataset.records, &query.filter);
    let buffer = export_deals_csv(&deals, &dataset.extra_headers())?;

    info!(dataset = %query.dataset, rows = deals.len(), "csv export");
    csv_response(buffer, &format!("{EXPORT_BASENAME}.csv"))
}

fn export_xlsx(req: &Request, state: &AppState) -> ResultResp {
    let (query, dataset) = lookup(req, state)?;
    let deals = filter_deals(&dataset.records, &query.filter);
    let buffer = export_deals_xlsx(&deals)?;

    info!(dataset = %query.dataset, rows = deals.len(), "xlsx export");
    xlsx_response(buffer, &format!("{EXPORT_BASENAME}.xlsx"))
}
