pub mod filter_ingredients;
pub mod scan_session;
