use thiserror::Error;

use crate::llm::LlmError;

/// Errors that end a conversation turn without a response.
///
/// Registry failures never end a turn; see `LookupOutcome::TransportError`.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("model invocation failed: {0}")]
    Invocation(#[from] LlmError),
}

/// Errors raised while assembling the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    MissingSetting(String),
}
