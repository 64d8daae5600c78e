pub mod history;
pub mod llm;
pub mod nutrition;
pub mod ocr;
pub mod profile;
pub mod session;
pub mod storage;
