//! LlmProvider trait definition.
//!
//! This is the core abstraction that all language-model backends implement.
//! Uses RPITIT for `complete`; the conversation pipeline only ever needs a
//! single, non-streaming completion per turn.

use kentekenbot_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends (Azure OpenAI, OpenAI-compatible, ...).
///
/// Implementations live in kentekenbot-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "azure", "openai").
    fn name(&self) -> &str;

    /// Model or deployment identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
