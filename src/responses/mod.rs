pub mod download;
pub mod errors;
pub mod html;
pub mod redirect;

pub use download::{csv_response, xlsx_response};
pub use errors::{error_response, ResultResp};
pub use html::html_response;
pub use redirect::see_other;
