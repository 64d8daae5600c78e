pub mod ocr_space;
pub mod tesseract;

pub use ocr_space::OcrSpaceClient;
pub use tesseract::TesseractEngine;
