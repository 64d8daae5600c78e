use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::entities::ImagePayload,
    ocr::entities::{OcrProgressSink, ResolvedText},
};

/// Paid remote OCR provider, tried first.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteOcrProvider: Send + Sync {
    /// Returns the recognized text. An empty result must be reported as an
    /// error so the resolver escalates to the local engine.
    fn recognize(
        &self,
        image: &ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Offline OCR engine used when the remote provider fails.
#[cfg_attr(test, mockall::automock)]
pub trait LocalOcrEngine: Send + Sync {
    fn recognize(
        &self,
        image: &ImagePayload,
        progress: OcrProgressSink,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for text extraction
#[cfg_attr(test, mockall::automock)]
pub trait OcrService: Send + Sync {
    fn resolve_text(
        &self,
        image: ImagePayload,
        progress: OcrProgressSink,
    ) -> impl Future<Output = Result<ResolvedText, CoreError>> + Send;
}
