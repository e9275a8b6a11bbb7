//! LLM provider trait and configuration.

use crate::error::Result;

/// Model families known to support a structured-output directive.
const JSON_OUTPUT_FAMILIES: &[&str] = &["gemini"];

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier (e.g., "gemini-1.5-flash").
    pub model: String,

    /// Maximum tokens in the response.
    pub max_output_tokens: usize,
}

impl LlmConfig {
    /// Create a configuration for a specific model.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Whether the model family supports requesting JSON-formatted output.
    pub fn wants_json_output(&self) -> bool {
        let model = self.model.to_lowercase();
        JSON_OUTPUT_FAMILIES.iter().any(|f| model.contains(f))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            max_output_tokens: 200,
        }
    }
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe (Send + Sync) so a single client
/// instance can be reused across all tables in a run.
pub trait LlmProvider: Send + Sync {
    /// Send one prompt to the service and return the raw response text.
    ///
    /// Returns an empty string when the service answers without text.
    /// Rate-limit/quota failures surface as `ScreenError::RateLimited`;
    /// everything else is non-retryable.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
