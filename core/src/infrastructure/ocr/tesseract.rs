use std::process::Stdio;

use tokio::{io::AsyncWriteExt, process::Command};
use tracing::instrument;

use crate::domain::{
    common::{OCR_LANGUAGE, entities::app_errors::CoreError},
    image::entities::ImagePayload,
    ocr::{
        entities::{OcrProgressSink, RECOGNIZING_TEXT},
        ports::LocalOcrEngine,
    },
};

pub const DEFAULT_TESSERACT_BINARY: &str = "tesseract";

/// Runs the `tesseract` binary locally, feeding the image through stdin.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: String,
}

impl TesseractEngine {
    pub fn new(binary: String) -> Self {
        Self { binary }
    }
}

impl LocalOcrEngine for TesseractEngine {
    #[instrument(skip(self, image, progress), fields(binary = %self.binary))]
    async fn recognize(
        &self,
        image: &ImagePayload,
        progress: OcrProgressSink,
    ) -> Result<String, CoreError> {
        progress.report("initializing tesseract", 0.0);

        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", OCR_LANGUAGE])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                tracing::error!("Failed to start tesseract: {}", e);
                CoreError::ExternalServiceError(format!("Failed to start tesseract: {}", e))
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            CoreError::ExternalServiceError("tesseract stdin unavailable".to_string())
        })?;

        progress.report(RECOGNIZING_TEXT, 0.0);

        let bytes = image.bytes.clone();
        let feed = async move {
            let written = stdin.write_all(&bytes).await;
            drop(stdin);
            written
        };

        let (written, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| {
            tracing::error!("tesseract did not finish: {}", e);
            CoreError::ExternalServiceError(format!("tesseract did not finish: {}", e))
        })?;

        if let Err(e) = written {
            tracing::warn!("Failed to write image to tesseract: {}", e);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, "tesseract failed: {}", stderr.trim());
            return Err(CoreError::ExternalServiceError(format!(
                "tesseract exited with {}",
                output.status
            )));
        }

        progress.report(RECOGNIZING_TEXT, 1.0);

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::image::entities::ImageSource;

    #[tokio::test]
    async fn test_missing_binary_is_an_error() {
        let engine = TesseractEngine::new("labelguard-no-such-tesseract".to_string());
        let image =
            ImagePayload::new(Bytes::from_static(b"jpeg"), None, ImageSource::Upload).unwrap();

        let result = engine.recognize(&image, OcrProgressSink::noop()).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
