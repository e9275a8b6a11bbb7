//! Mock LLM provider for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{Result, ScreenError};

use super::provider::{LlmConfig, LlmProvider};

/// Default canned decision text.
const DEFAULT_DECISION: &str = r#"{"include": true, "reason": "Tracks asthma symptoms."}"#;

/// What the mock should do before it starts succeeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Fail with a rate-limit error.
    RateLimit,
    /// Fail with a generic API error.
    Api,
}

/// Mock LLM provider that returns predictable responses for testing.
///
/// Optionally fails the first `failures` calls with a chosen error class,
/// which makes retry behavior observable without a network.
pub struct MockProvider {
    config: LlmConfig,
    response: String,
    failures: u32,
    failure_kind: MockFailure,
    attempts: AtomicU32,
}

impl MockProvider {
    /// Create a new mock provider with the default canned response.
    pub fn new() -> Self {
        Self::with_response(DEFAULT_DECISION)
    }

    /// Create a mock provider returning the given text on success.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            config: LlmConfig::default(),
            response: response.into(),
            failures: 0,
            failure_kind: MockFailure::RateLimit,
            attempts: AtomicU32::new(0),
        }
    }

    /// Fail the first `count` calls with the given error class.
    pub fn failing(mut self, count: u32, kind: MockFailure) -> Self {
        self.failures = count;
        self.failure_kind = kind;
        self
    }

    /// Use a custom configuration.
    pub fn with_config(mut self, config: LlmConfig) -> Self {
        self.config = config;
        self
    }

    /// Total number of `generate` calls observed so far.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn generate(&self, _prompt: &str) -> Result<String> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);

        if attempt < self.failures {
            return Err(match self.failure_kind {
                MockFailure::RateLimit => {
                    ScreenError::RateLimited("429: simulated quota exhaustion".to_string())
                }
                MockFailure::Api => ScreenError::Api {
                    status: 500,
                    message: "simulated server error".to_string(),
                },
            });
        }

        Ok(self.response.clone())
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
