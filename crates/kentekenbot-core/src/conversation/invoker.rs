//! Single-shot model invocation.
//!
//! One call per turn, bounded by a timeout, never retried. GenAI spans
//! instrument the call so usage shows up in traces.

use std::time::Duration;

use tracing::{Instrument, error, field, info, info_span};

use kentekenbot_types::llm::{CompletionRequest, LlmError, Message};
use kentekenbot_types::usage::UsageDelta;

use crate::llm::box_provider::BoxLlmProvider;

/// Per-call settings applied to every request.
#[derive(Debug, Clone)]
pub struct InvokerSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub timeout: Duration,
}

impl Default for InvokerSettings {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// The assistant reply and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub reply: String,
    pub delta: UsageDelta,
}

/// Sends the assembled message sequence to the language model.
pub struct ConversationInvoker {
    provider: BoxLlmProvider,
    settings: InvokerSettings,
}

impl ConversationInvoker {
    pub fn new(provider: BoxLlmProvider, settings: InvokerSettings) -> Self {
        Self { provider, settings }
    }

    /// Call the model once with `messages`.
    ///
    /// A timeout is reported as [`LlmError::Timeout`]; any failure is final.
    pub async fn invoke(&self, messages: Vec<Message>) -> Result<Invocation, LlmError> {
        let request = CompletionRequest {
            model: self.provider.model().to_string(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.operation.name = "chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = ?request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            gen_ai.usage.input_tokens = field::Empty,
            gen_ai.usage.output_tokens = field::Empty,
        );

        let call = tokio::time::timeout(self.settings.timeout, self.provider.complete(&request))
            .instrument(span.clone())
            .await;

        let response = match call {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                error!(provider = self.provider.name(), error = %err, "model invocation failed");
                return Err(err);
            }
            Err(_) => {
                error!(
                    provider = self.provider.name(),
                    timeout = ?self.settings.timeout,
                    "model invocation timed out"
                );
                return Err(LlmError::Timeout(self.settings.timeout));
            }
        };

        span.record("gen_ai.usage.input_tokens", response.usage.input_tokens);
        span.record("gen_ai.usage.output_tokens", response.usage.output_tokens);
        info!(
            provider = self.provider.name(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = %response.stop_reason,
            "model invocation complete"
        );

        Ok(Invocation {
            reply: response.content,
            delta: response.usage.into(),
        })
    }
}
