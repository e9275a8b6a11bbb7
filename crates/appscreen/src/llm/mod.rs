//! LLM service integration for relevance screening.
//!
//! One blocking request per row, sequentially, through the
//! [`LlmProvider`] trait. The Gemini backend is the production provider;
//! [`MockProvider`] keeps the rest of the pipeline testable offline.
//! Rate-limit failures are the only retryable class and are handled by
//! [`send_with_retry`].

mod gemini;
mod mock;
mod prompts;
mod provider;
mod retry;

pub use gemini::{API_KEY_VAR, GeminiProvider};
pub use mock::{MockFailure, MockProvider};
pub use prompts::{RUBRIC, review_prompt};
pub use provider::{LlmConfig, LlmProvider};
pub use retry::{RetryPolicy, send_with_retry};
