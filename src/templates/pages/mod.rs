pub mod deals;
pub mod home;

pub use deals::{deals_page, DealsVm};
pub use home::home_page;
