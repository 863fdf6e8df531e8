pub mod deal;
pub mod error;
pub mod filter;
pub mod logic;
pub mod property;

pub use deal::{enrich, EnrichedDataset, EnrichedRecord};
pub use error::DealError;
pub use filter::{filter_deals, locations, DealFilter};
pub use property::load_csv;
