use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    chat::{entities::LLMReply, ports::LLMClient},
    common::entities::app_errors::CoreError,
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Either candidates or an error object; the body is read whatever the
/// HTTP status so upstream error messages reach the user.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Option<Vec<PartResponse>>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e.without_url());
                CoreError::ExternalServiceError("LLM API request failed".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Gemini API returned status {}", status);
        }

        response.text().await.map_err(|e| {
            tracing::error!("Failed to read Gemini response: {}", e.without_url());
            CoreError::ExternalServiceError("Failed to read LLM response".to_string())
        })
    }
}

pub(crate) fn reply_from_body(body: &str) -> Result<LLMReply, CoreError> {
    let gemini_response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse Gemini response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })?;

    let text = gemini_response
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.as_ref())
        .and_then(|parts| parts.first())
        .and_then(|p| p.text.clone());

    if let Some(text) = text {
        return Ok(LLMReply::Text(text));
    }

    if let Some(error) = gemini_response.error {
        let message = error.message.unwrap_or_default();
        tracing::error!("Gemini API error: {}", message);
        return Ok(LLMReply::UpstreamError(message));
    }

    Ok(LLMReply::Empty)
}

impl LLMClient for GeminiLLMClient {
    #[instrument(skip(self, prompt), fields(model = %self.model_name))]
    async fn generate_text(&self, prompt: String) -> Result<LLMReply, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let body = self.call_gemini_api(request).await?;
        reply_from_body(&body)
    }
}
