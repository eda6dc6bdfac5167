//! Application state wiring all services together.
//!
//! AppState holds the conversation service used by the REST API. The service
//! is generic over the registry trait; AppState pins it to the RDW client.

use std::sync::Arc;
use std::time::Duration;

use kentekenbot_core::conversation::invoker::{ConversationInvoker, InvokerSettings};
use kentekenbot_core::conversation::service::ConversationService;
use kentekenbot_core::enrich::VehicleDataEnricher;
use kentekenbot_core::llm::box_provider::BoxLlmProvider;
use kentekenbot_infra::config::{env_var, resolve_api_key};
use kentekenbot_infra::llm::create_provider;
use kentekenbot_infra::registry::rdw::RdwRegistryClient;
use kentekenbot_types::config::ServiceConfig;

/// Conversation service pinned to the RDW open-data registry.
pub type ConcreteConversationService = ConversationService<RdwRegistryClient>;

/// Shared application state for the REST API.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConcreteConversationService>,
}

impl AppState {
    /// Wire the services from configuration, resolving the API key from the
    /// environment.
    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(&config.llm, env_var)?;
        let provider = create_provider(&config.llm, api_key)?;

        tracing::info!(
            backend = %config.llm.backend,
            model = provider.model(),
            registry = %config.registry.base_url,
            "services configured"
        );

        Self::with_provider(config, provider)
    }

    /// Wire the services around an already constructed model provider.
    pub fn with_provider(config: &ServiceConfig, provider: BoxLlmProvider) -> anyhow::Result<Self> {
        let registry = RdwRegistryClient::new(
            config.registry.base_url.clone(),
            Duration::from_secs(config.registry.timeout_secs),
        )?;
        let enricher = VehicleDataEnricher::new(registry, config.registry.on_registry_error);

        let invoker = ConversationInvoker::new(
            provider,
            InvokerSettings {
                max_tokens: config.llm.max_tokens,
                temperature: config.llm.temperature,
                timeout: Duration::from_secs(config.llm.timeout_secs),
            },
        );

        let mut conversation = ConversationService::new(enricher, invoker);
        if let Some(prompt) = &config.llm.system_prompt {
            conversation = conversation.with_preamble(prompt.clone());
        }

        Ok(Self {
            conversation: Arc::new(conversation),
        })
    }
}
