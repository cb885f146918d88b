//! Wire types for the `generateContent` endpoint.

use crate::domain::errors::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str, temperature: f32, top_p: f32) -> Self {
        Self {
            contents: vec![Content { role: Some("user".to_string()), parts: vec![Part { text: Some(prompt.to_string()) }] }],
            generation_config: GenerationConfig { temperature, top_p },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    ///
    /// An `error` object, a missing candidate or blank text is a provider
    /// failure.
    pub fn into_text(self) -> Result<String, AppError> {
        if let Some(err) = self.error {
            return Err(AppError::ProviderError(match err.code {
                Some(code) => format!("{}: {}", code, err.message),
                None => err.message,
            }));
        }
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(AppError::ProviderError("response contained no text".to_string()));
        }
        Ok(text)
    }
}

/// Parse a raw response body and extract its text.
pub fn extract_text(body: &str) -> Result<String, AppError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AppError::ProviderError(format!("malformed response: {}", e)))?;
    response.into_text()
}
