use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::{OCR_LANGUAGE, entities::app_errors::CoreError},
    image::entities::ImagePayload,
    ocr::ports::RemoteOcrProvider,
};

pub const DEFAULT_OCR_SPACE_ENDPOINT: &str = "https://api.ocr.space/parse/image";

#[derive(Debug, Clone)]
pub struct OcrSpaceClient {
    api_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OcrSpaceResponse {
    #[serde(rename = "ParsedResults")]
    parsed_results: Option<Vec<ParsedResult>>,
    #[serde(rename = "ErrorMessage")]
    error_message: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ParsedResult {
    #[serde(rename = "ParsedText")]
    parsed_text: Option<String>,
}

impl OcrSpaceClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: Client::new(),
        }
    }

    fn form(&self, image: &ImagePayload) -> Result<Form, CoreError> {
        let file = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name())
            .mime_str(&image.mime_type)
            .map_err(|e| {
                tracing::error!("Invalid image mime type {}: {}", image.mime_type, e);
                CoreError::Invalid
            })?;

        Ok(Form::new()
            .text("apikey", self.api_key.clone())
            .text("language", OCR_LANGUAGE)
            .text("isOverlayRequired", "false")
            .part("file", file))
    }
}

/// Accepts only a body whose first parsed result carries non-empty text.
pub(crate) fn parsed_text_from_body(body: &str) -> Result<String, CoreError> {
    let response: OcrSpaceResponse = serde_json::from_str(body).map_err(|e| {
        CoreError::ExternalServiceError(format!("Failed to parse OCR response: {}", e))
    })?;

    let text = response
        .parsed_results
        .as_ref()
        .and_then(|results| results.first())
        .and_then(|result| result.parsed_text.clone())
        .filter(|text| !text.is_empty());

    match (text, response.error_message) {
        (Some(text), _) => Ok(text),
        (None, Some(message)) if !message.is_null() => Err(CoreError::ExternalServiceError(
            format!("OCR provider error: {}", message),
        )),
        (None, _) => Err(CoreError::ExternalServiceError(
            "OCR provider returned no text".to_string(),
        )),
    }
}

impl RemoteOcrProvider for OcrSpaceClient {
    #[instrument(skip(self, image), fields(mime_type = %image.mime_type))]
    async fn recognize(&self, image: &ImagePayload) -> Result<String, CoreError> {
        let form = self.form(image)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OCR request failed: {}", e);
                CoreError::ExternalServiceError(format!("OCR API error: {}", e))
            })?;

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read OCR response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read OCR response: {}", e))
        })?;

        parsed_text_from_body(&body)
    }
}
