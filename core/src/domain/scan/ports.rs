use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, ocr::entities::OcrProgressSink,
    scan::entities::ScanReport,
};

/// Service trait for the full scan pipeline
#[cfg_attr(test, mockall::automock)]
pub trait ScanService: Send + Sync {
    /// OCR, extraction, classification and history for the session's
    /// current image.
    fn scan(
        &self,
        session_id: Uuid,
        progress: OcrProgressSink,
    ) -> impl Future<Output = Result<ScanReport, CoreError>> + Send;
}
