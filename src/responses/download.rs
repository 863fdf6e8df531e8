// responses/download.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Return a generated file as an attachment.
pub fn download_response(buffer: Vec<u8>, content_type: &str, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}

pub fn csv_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    download_response(buffer, mime::TEXT_CSV_UTF_8.as_ref(), filename)
}

pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    download_response(buffer, XLSX_CONTENT_TYPE, filename)
}
