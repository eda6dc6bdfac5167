//! OpenAI-protocol LLM provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] serves both Azure OpenAI and plain
//! OpenAI-compatible endpoints. The two differ only in how the
//! [`async_openai`] client is configured (URL layout, auth header, API
//! version), so the provider is generic over the client configuration.
//!
//! Every request is sent exactly once: the client is built with a backoff
//! policy that never schedules a retry, so 5xx and 429 answers surface as
//! errors immediately.

pub mod config;

use std::time::Duration;

use async_openai::Client;
use async_openai::config::{AzureConfig, Config, OpenAIConfig};
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest, FinishReason,
};
use secrecy::ExposeSecret;

use kentekenbot_core::llm::provider::LlmProvider;
use kentekenbot_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, StopReason, Usage,
};

use self::config::{AzureOpenAiConfig, OpenAiCompatConfig};

/// Chat-completion provider for any endpoint speaking the OpenAI protocol.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiCompatibleProvider<C: Config = OpenAIConfig> {
    client: Client<C>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider<OpenAIConfig> {
    /// Create a provider for a plain OpenAI-compatible endpoint.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config).with_backoff(single_attempt()),
            provider_name: config.provider_name,
            model: config.model,
        }
    }

    /// Create an OpenAI provider against `https://api.openai.com/v1`.
    pub fn openai(api_key: secrecy::SecretString, model: &str) -> Self {
        Self::new(config::openai_defaults(api_key, model))
    }
}

impl OpenAiCompatibleProvider<AzureConfig> {
    /// Create a provider for an Azure OpenAI deployment.
    ///
    /// Requests go to `{api_base}/openai/deployments/{deployment}` with the
    /// `api-key` header and the configured `api-version`.
    pub fn azure(config: AzureOpenAiConfig) -> Self {
        let azure_config = AzureConfig::new()
            .with_api_base(&config.api_base)
            .with_api_version(&config.api_version)
            .with_deployment_id(&config.deployment)
            .with_api_key(config.api_key.expose_secret());

        Self {
            client: Client::with_config(azure_config).with_backoff(single_attempt()),
            provider_name: "azure".to_string(),
            model: config.deployment,
        }
    }
}

/// Backoff whose elapsed-time budget is spent before the first retry.
fn single_attempt() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

impl<C: Config> OpenAiCompatibleProvider<C> {
    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => {
                    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    })
                }
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            })
            .collect();

        // Use the model from the request if set, otherwise fall back to config default
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: request.max_tokens,
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

impl<C: Config> LlmProvider for OpenAiCompatibleProvider<C> {
    fn name(&self) -> &str {
        &self.provider_name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        let choice = response.choices.first();

        let content = choice
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let stop_reason = choice
            .and_then(|c| c.finish_reason.as_ref())
            .map(|fr| match fr {
                FinishReason::Length => StopReason::MaxTokens,
                FinishReason::ContentFilter => StopReason::ContentFilter,
                _ => StopReason::EndTurn,
            })
            .unwrap_or(StopReason::EndTurn);

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || code == "invalid_api_key"
                || code == "401"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
                || api_err.message.contains("invalid subscription key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || code == "429" || error_type == "rate_limit_error"
            {
                LlmError::RateLimited
            } else if code == "context_length_exceeded"
                || api_err.message.contains("maximum context length")
            {
                LlmError::ContextLengthExceeded
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited,
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}
