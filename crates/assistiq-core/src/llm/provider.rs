//! LlmProvider trait definition.
//!
//! This is the abstraction the reply path goes through. Uses native async
//! fn in traits (RPITIT, Rust 2024 edition).

use assistiq_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
///
/// Implementations live in assistiq-infra (e.g., `OpenAiProvider`). Tests
/// in the core crate substitute mocks at this seam.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
