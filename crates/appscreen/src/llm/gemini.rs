//! Google Gemini API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{Result, ScreenError};

use super::provider::{LlmConfig, LlmProvider};

/// Gemini API endpoint base.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the service credential.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Google Gemini provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::default())
    }

    /// Create a new Gemini provider with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScreenError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from the `GOOGLE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(LlmConfig::default())
    }

    /// Create from the environment with custom configuration.
    pub fn from_env_with_config(config: LlmConfig) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ScreenError::Config(format!("{} environment variable not set", API_KEY_VAR))
        })?;
        Self::with_config(api_key, config)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| ScreenError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    /// Build the generateContent request body.
    fn build_body(&self, prompt: &str) -> Value {
        let mut generation_config = json!({
            "maxOutputTokens": self.config.max_output_tokens,
        });

        if self.config.wants_json_output() {
            generation_config["responseMimeType"] = json!("application/json");
        }

        json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ],
            "generationConfig": generation_config,
        })
    }

    /// Classify a non-success response into the error taxonomy.
    fn classify_error(status: u16, body: &str) -> ScreenError {
        let lowered = body.to_lowercase();
        if status == 429 || lowered.contains("quota") || lowered.contains("resource_exhausted") {
            ScreenError::RateLimited(format!("{}: {}", status, body))
        } else {
            ScreenError::Api {
                status,
                message: body.to_string(),
            }
        }
    }

    /// Extract the response text from a parsed API response.
    ///
    /// Returns an empty string when the service answered without text.
    fn extract_text(response: ApiResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

impl LlmProvider for GeminiProvider {
    fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", API_BASE, self.config.model);
        let body = self.build_body(prompt);

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(Self::classify_error(status.as_u16(), &error_text));
        }

        let api_response: ApiResponse = response.json()?;
        Ok(Self::extract_text(api_response))
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Gemini API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_requests_json_for_gemini_models() {
        let provider = GeminiProvider::new("test-key").unwrap();
        let body = provider.build_body("hello");

        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            json!("application/json")
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], json!(200));
        assert_eq!(body["contents"][0]["parts"][0]["text"], json!("hello"));
    }

    #[test]
    fn test_body_omits_json_directive_for_other_models() {
        let provider =
            GeminiProvider::with_config("test-key", LlmConfig::for_model("other-model")).unwrap();
        let body = provider.build_body("hello");

        assert!(body["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn test_classify_429_as_rate_limited() {
        let err = GeminiProvider::classify_error(429, "slow down");
        assert!(err.is_rate_limit());
    }

    #[test]
    fn test_classify_quota_message_as_rate_limited() {
        let err = GeminiProvider::classify_error(400, "Quota exceeded for requests");
        assert!(err.is_rate_limit());

        let err = GeminiProvider::classify_error(503, "RESOURCE_EXHAUSTED");
        assert!(err.is_rate_limit());
    }

    #[test]
    fn test_classify_other_errors_as_api() {
        let err = GeminiProvider::classify_error(500, "internal error");
        assert!(!err.is_rate_limit());
        match err {
            ScreenError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = ApiResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![
                        Part {
                            text: "{\"include\": true,".to_string(),
                        },
                        Part {
                            text: " \"reason\": \"ok\"}".to_string(),
                        },
                    ],
                },
            }],
        };

        assert_eq!(
            GeminiProvider::extract_text(response),
            "{\"include\": true, \"reason\": \"ok\"}"
        );
    }

    #[test]
    fn test_extract_text_empty_when_no_candidates() {
        let response = ApiResponse { candidates: vec![] };
        assert_eq!(GeminiProvider::extract_text(response), "");
    }
}
