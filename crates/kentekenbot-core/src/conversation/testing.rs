//! Deterministic stand-ins for the model and the registry.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use kentekenbot_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
};
use kentekenbot_types::vehicle::LookupOutcome;

use crate::llm::provider::LlmProvider;
use crate::registry::VehicleRegistry;

#[derive(Clone)]
enum MockResult {
    Reply { content: String, usage: Usage },
    Error(MockError),
}

#[derive(Clone)]
enum MockError {
    Auth,
    Provider(String),
}

pub struct MockProvider {
    result: MockResult,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    pub fn replying(content: &str, input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            result: MockResult::Reply {
                content: content.to_string(),
                usage: Usage {
                    input_tokens,
                    output_tokens,
                },
            },
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn failing(err: LlmError) -> Self {
        let err = match err {
            LlmError::AuthenticationFailed => MockError::Auth,
            other => MockError::Provider(other.to_string()),
        };
        Self {
            result: MockResult::Error(err),
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Handle on every request the provider has seen.
    pub fn requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.result.clone() {
            MockResult::Reply { content, usage } => Ok(CompletionResponse {
                id: "resp-mock".to_string(),
                content,
                model: "mock-model".to_string(),
                stop_reason: StopReason::EndTurn,
                usage,
            }),
            MockResult::Error(MockError::Auth) => Err(LlmError::AuthenticationFailed),
            MockResult::Error(MockError::Provider(message)) => Err(LlmError::Provider { message }),
        }
    }
}

pub struct MockRegistry {
    outcome: LookupOutcome,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockRegistry {
    pub fn returning(outcome: LookupOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl VehicleRegistry for MockRegistry {
    async fn lookup(&self, plate: &str) -> LookupOutcome {
        self.calls.lock().unwrap().push(plate.to_string());
        self.outcome.clone()
    }
}
