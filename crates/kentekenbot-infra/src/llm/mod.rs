//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](kentekenbot_core::llm::provider::LlmProvider)
//! implementation for the OpenAI protocol, and a provider factory
//! ([`create_provider`]) that picks the Azure or plain OpenAI flavour from
//! an [`LlmConfig`].

pub mod openai_compat;

use secrecy::SecretString;

use kentekenbot_core::llm::box_provider::BoxLlmProvider;
use kentekenbot_types::config::{LlmBackend, LlmConfig};
use kentekenbot_types::error::ConfigError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{AzureOpenAiConfig, OpenAiCompatConfig};

/// Create a [`BoxLlmProvider`] from an [`LlmConfig`].
///
/// # Arguments
///
/// * `config` - Backend selection plus endpoint settings
/// * `api_key` - The resolved API key for that backend
///
/// # Errors
///
/// Returns [`ConfigError::MissingSetting`] when the Azure backend is selected
/// without an instance name or deployment.
pub fn create_provider(
    config: &LlmConfig,
    api_key: SecretString,
) -> Result<BoxLlmProvider, ConfigError> {
    match config.backend {
        LlmBackend::Azure => {
            let instance = config
                .instance_name
                .as_deref()
                .ok_or_else(|| ConfigError::MissingSetting("llm.instance_name".to_string()))?;
            let deployment = config
                .deployment
                .as_deref()
                .ok_or_else(|| ConfigError::MissingSetting("llm.deployment".to_string()))?;

            let provider = OpenAiCompatibleProvider::azure(AzureOpenAiConfig::for_instance(
                instance,
                deployment,
                &config.api_version,
                api_key,
            ));
            Ok(BoxLlmProvider::new(provider))
        }
        LlmBackend::OpenAi => {
            let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
                provider_name: "openai".to_string(),
                base_url: config.base_url.clone(),
                api_key,
                model: config.model.clone(),
            });
            Ok(BoxLlmProvider::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_azure_provider() {
        let config = LlmConfig {
            instance_name: Some("rdw-bot".to_string()),
            deployment: Some("gpt4o".to_string()),
            ..Default::default()
        };
        let provider = create_provider(&config, SecretString::from("key")).unwrap();
        assert_eq!(provider.name(), "azure");
        assert_eq!(provider.model(), "gpt4o");
    }

    #[test]
    fn test_azure_without_deployment_is_rejected() {
        let config = LlmConfig {
            instance_name: Some("rdw-bot".to_string()),
            ..Default::default()
        };
        let err = create_provider(&config, SecretString::from("key")).err().unwrap();
        assert!(matches!(err, ConfigError::MissingSetting(ref key) if key == "llm.deployment"));
    }

    #[test]
    fn test_create_openai_provider() {
        let config = LlmConfig {
            backend: LlmBackend::OpenAi,
            model: "gpt-4o-mini".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config, SecretString::from("sk-test")).unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model(), "gpt-4o-mini");
    }
}
