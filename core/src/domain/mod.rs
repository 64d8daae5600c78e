pub mod chat;
pub mod common;
pub mod history;
pub mod image;
pub mod ingredient;
pub mod ocr;
pub mod profile;
pub mod risk;
pub mod scan;
pub mod session;
