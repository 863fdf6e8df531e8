pub mod columns;
pub mod export_csv;
pub mod export_xlsx;

pub use columns::DEAL_COLUMNS;
pub use export_csv::export_deals_csv;
pub use export_xlsx::export_deals_xlsx;

pub const EXPORT_BASENAME: &str = "filtered_property_deals";
