pub mod charts;
pub mod error;

pub use charts::{bar_chart, line_chart};
pub use error::error_page;
