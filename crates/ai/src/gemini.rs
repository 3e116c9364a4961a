//! Gemini REST client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cinetrack_shared::GeminiConfig;

use crate::error::NarrativeError;
use crate::generator::NarrativeGenerator;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `NarrativeError::NotConfigured` when no API key is set, or
    /// `NarrativeError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, NarrativeError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(NarrativeError::NotConfigured)?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NarrativeError::Request(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: api_key.to_string(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini");

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NarrativeError::Timeout(self.timeout_secs)
                } else {
                    NarrativeError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Status { status, body });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| NarrativeError::Request(e.to_string()))?;

        body.into_text().ok_or(NarrativeError::EmptyResponse)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.0-flash-exp".to_string(),
            base_url: "https://example.test/v1beta/".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        assert!(matches!(
            GeminiClient::from_config(&config(None)),
            Err(NarrativeError::NotConfigured)
        ));
        assert!(matches!(
            GeminiClient::from_config(&config(Some("  "))),
            Err(NarrativeError::NotConfigured)
        ));
    }

    #[test]
    fn test_endpoint_joins_base_url_and_model() {
        let client = GeminiClient::from_config(&config(Some("k"))).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
        assert_eq!(client.model(), "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let body: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hello, " }, { "text": "crew" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(body.into_text().as_deref(), Some("Hello, crew"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let body: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(body.into_text().is_none());
    }
}
