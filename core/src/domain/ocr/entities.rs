use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use utoipa::ToSchema;

/// Status tag the local engine uses while it is reading the image.
pub const RECOGNIZING_TEXT: &str = "recognizing text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OcrProvider {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedText {
    pub text: String,
    pub provider: OcrProvider,
}

/// One progress update emitted by the local OCR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OcrProgress {
    pub status: String,
    /// Fraction in `0.0..=1.0`.
    pub progress: f32,
}

impl OcrProgress {
    pub fn percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn is_recognizing(&self) -> bool {
        self.status == RECOGNIZING_TEXT
    }
}

/// Observer handed to the OCR resolver. Updates are pushed into an unbounded
/// channel so the caller can drain them at its own pace; a sink without a
/// channel drops everything.
#[derive(Debug, Clone, Default)]
pub struct OcrProgressSink {
    tx: Option<mpsc::UnboundedSender<OcrProgress>>,
}

impl OcrProgressSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OcrProgress>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub fn noop() -> Self {
        Self { tx: None }
    }

    pub fn report(&self, status: &str, progress: f32) {
        let update = OcrProgress {
            status: status.to_string(),
            progress,
        };

        if update.is_recognizing() {
            tracing::debug!(percent = update.percent(), "OCR fallback progress");
        }

        if let Some(tx) = &self.tx {
            // receiver gone means nobody is listening anymore
            let _ = tx.send(update);
        }
    }
}

/// Drains every update already sent and keeps only the ones worth showing
/// (the `recognizing text` phase), as rounded percentages.
pub fn drain_recognition_percentages(rx: &mut mpsc::UnboundedReceiver<OcrProgress>) -> Vec<u8> {
    let mut percentages = Vec::new();
    while let Ok(update) = rx.try_recv() {
        if update.is_recognizing() {
            percentages.push(update.percent());
        }
    }
    percentages
}
