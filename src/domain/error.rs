use thiserror::Error;

/// Reasons an upload cannot be turned into an enriched dataset.
/// Either the whole table is produced or none of it is.
#[derive(Debug, Error, PartialEq)]
pub enum DealError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("The uploaded file has no property rows")]
    EmptyDataset,
}
