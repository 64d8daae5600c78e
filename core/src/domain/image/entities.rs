use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Where the image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Upload,
    Capture,
}

impl std::str::FromStr for ImageSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upload" => Ok(ImageSource::Upload),
            "capture" => Ok(ImageSource::Capture),
            _ => Err(CoreError::Invalid),
        }
    }
}

/// Binary image plus the base64 data URL used for display and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Bytes,
    pub mime_type: String,
    pub data_url: String,
    pub source: ImageSource,
}

/// Recognizes the formats browsers produce from a file picker or a canvas.
fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xff, 0xd8, 0xff, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}

impl ImagePayload {
    /// Builds a payload from raw bytes. The type comes from the bytes
    /// themselves, then from the declared content type, then defaults to
    /// JPEG, which is what webcam frames are encoded as.
    pub fn new(
        bytes: Bytes,
        mime_type: Option<&str>,
        source: ImageSource,
    ) -> Result<Self, CoreError> {
        if bytes.is_empty() {
            return Err(CoreError::Invalid);
        }

        let mime_type = match (sniff_image_mime(&bytes), mime_type) {
            (Some(sniffed), _) => sniffed.to_string(),
            (None, Some(mime)) if mime.starts_with("image/") => mime.to_string(),
            (None, _) => DEFAULT_IMAGE_MIME.to_string(),
        };

        let data_url = format!(
            "data:{};base64,{}",
            mime_type,
            general_purpose::STANDARD.encode(&bytes)
        );

        Ok(Self {
            bytes,
            mime_type,
            data_url,
            source,
        })
    }

    pub fn file_name(&self) -> String {
        let extension = self
            .mime_type
            .strip_prefix("image/")
            .unwrap_or("jpeg")
            .to_string();
        format!("label.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_image() {
        let result = ImagePayload::new(Bytes::new(), Some("image/png"), ImageSource::Upload);
        assert_eq!(result, Err(CoreError::Invalid));
    }

    #[test]
    fn test_upload_keeps_image_mime() {
        let payload =
            ImagePayload::new(Bytes::from_static(b"abc"), Some("image/png"), ImageSource::Upload)
                .unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data_url, "data:image/png;base64,YWJj");
        assert_eq!(payload.file_name(), "label.png");
    }

    #[test]
    fn test_capture_without_type_is_jpeg() {
        let payload =
            ImagePayload::new(Bytes::from_static(b"abc"), None, ImageSource::Capture).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
        assert!(payload.data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_png_capture_keeps_png_type() {
        let png = Bytes::from_static(b"\x89PNG\r\n\x1a\n\0\0\0\0");
        let payload = ImagePayload::new(png, Some("image/jpeg"), ImageSource::Capture).unwrap();

        assert_eq!(payload.mime_type, "image/png");
        assert!(payload.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(payload.file_name(), "label.png");
    }

    #[test]
    fn test_sniffed_type_wins_over_declared() {
        let jpeg = Bytes::from_static(b"\xff\xd8\xff\xe0");
        let payload = ImagePayload::new(jpeg, Some("image/png"), ImageSource::Upload).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
    }

    #[test]
    fn test_non_image_mime_falls_back_to_jpeg() {
        let payload = ImagePayload::new(
            Bytes::from_static(b"abc"),
            Some("application/octet-stream"),
            ImageSource::Upload,
        )
        .unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn test_parse_source() {
        assert_eq!("Capture".parse::<ImageSource>(), Ok(ImageSource::Capture));
        assert_eq!("upload".parse::<ImageSource>(), Ok(ImageSource::Upload));
        assert!("camera".parse::<ImageSource>().is_err());
    }
}
