//! Token usage accounting types.
//!
//! Field names follow the client's camelCase wire format.

use serde::{Deserialize, Serialize};

use crate::llm::Usage;

/// Prompt/completion tokens attributed to a single model invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDelta {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl From<Usage> for UsageDelta {
    fn from(usage: Usage) -> Self {
        Self {
            prompt_tokens: u64::from(usage.input_tokens),
            completion_tokens: u64::from(usage.output_tokens),
        }
    }
}

/// Cumulative token usage.
///
/// Invariant: `total_tokens == prompt_tokens + completion_tokens`. Only
/// [`TokenUsage::apply`] mutates it, so the invariant cannot drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

impl TokenUsage {
    pub fn prompt_tokens(&self) -> u64 {
        self.prompt_tokens
    }

    pub fn completion_tokens(&self) -> u64 {
        self.completion_tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Add a delta and recompute the total. Saturates instead of wrapping.
    pub fn apply(&mut self, delta: UsageDelta) {
        self.prompt_tokens = self.prompt_tokens.saturating_add(delta.prompt_tokens);
        self.completion_tokens = self
            .completion_tokens
            .saturating_add(delta.completion_tokens);
        self.total_tokens = self.prompt_tokens.saturating_add(self.completion_tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_total_in_sync() {
        let mut usage = TokenUsage::default();
        usage.apply(UsageDelta {
            prompt_tokens: 120,
            completion_tokens: 30,
        });
        usage.apply(UsageDelta {
            prompt_tokens: 5,
            completion_tokens: 7,
        });
        assert_eq!(usage.prompt_tokens(), 125);
        assert_eq!(usage.completion_tokens(), 37);
        assert_eq!(usage.total_tokens(), 162);
    }

    #[test]
    fn test_token_usage_wire_format() {
        let mut usage = TokenUsage::default();
        usage.apply(UsageDelta {
            prompt_tokens: 1,
            completion_tokens: 2,
        });
        let json = serde_json::to_string(&usage).unwrap();
        assert_eq!(json, r#"{"promptTokens":1,"completionTokens":2,"totalTokens":3}"#);
    }

    #[test]
    fn test_delta_from_provider_usage() {
        let delta = UsageDelta::from(Usage {
            input_tokens: 40,
            output_tokens: 2,
        });
        assert_eq!(delta.prompt_tokens, 40);
        assert_eq!(delta.completion_tokens, 2);
    }
}
