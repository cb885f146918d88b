use super::dto::{GenerateContentRequest, extract_text};
use crate::config::IntelConfig;
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_intel::TextGenerator;
use gloo::net::http::Request;

/// `generateContent` client. One request per call; no retry or timeout.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    config: IntelConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, config: IntelConfig) -> Self {
        Self { api_key: api_key.into(), config }
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.config.endpoint.trim_end_matches('/'), self.config.model)
    }

    pub fn request_body(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(prompt, self.config.temperature, self.config.top_p)
    }

    async fn post(&self, prompt: &str) -> NetworkResult<String> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::ConfigError("missing API key".to_string()));
        }
        crate::log_debug!(LogComponent::Infrastructure("GeminiClient"), "POST {}", self.url());

        let response = Request::post(&self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .map_err(|e| AppError::NetworkError(format!("failed to encode request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("failed to send request: {:?}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("failed to read response: {:?}", e)))?;

        match extract_text(&body) {
            Err(_) if !response.ok() => Err(AppError::NetworkError(format!("HTTP {}", status))),
            other => other,
        }
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.post(prompt).await
    }
}
