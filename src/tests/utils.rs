use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::query::DealsQuery;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Two Leeds and two York listings. Undervalued: 1 Main St and 3 Mill Lane.
pub const LISTINGS_CSV: &str = "Address,Price (£),Area (m²),Bedrooms\n\
                                \"1 Main St, Leeds\",100000,50,2\n\
                                \"2 High St, Leeds\",200000,50,3\n\
                                \"3 Mill Lane, York\",90000,60,2\n\
                                \"4 Castle Rd, York\",310000,62,4\n";

/// State with a fixed seed so yields are the same on every run.
pub fn test_state() -> AppState {
    let mut cfg = AppConfig::default();
    cfg.server.seed = Some(42);
    AppState::new(cfg)
}

pub fn post_csv(state: &AppState, csv: &str) -> Result<Response, ServerError> {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header("Content-Type", "text/csv")
        .body(Body::from(csv.to_string()))
        .unwrap();
    handle(req, state)
}

pub fn get(state: &AppState, uri: &str) -> Result<Response, ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, state)
}

/// Upload and return the dataset id from the redirect.
pub fn upload_dataset(state: &AppState, csv: &str) -> String {
    let resp = post_csv(state, csv).expect("upload failed");
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    let (_, qs) = location.split_once('?').unwrap();
    DealsQuery::parse(Some(qs)).unwrap().dataset
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn read_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
