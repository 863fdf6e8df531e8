// errors.rs
use crate::domain::DealError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad query strings, exports) or the deal pipeline.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("Export Error: {0}")]
    ExportError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::Deal(_) => 400,
            ServerError::ExportError(_) | ServerError::InternalError => 500,
        }
    }
}
