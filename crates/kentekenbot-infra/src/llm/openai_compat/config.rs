//! Connection settings for the two OpenAI-protocol backends.
//!
//! Plain OpenAI-compatible endpoints are addressed by base URL and model.
//! Azure OpenAI is addressed by resource instance, deployment and API
//! version; the deployment doubles as the model identifier.

use secrecy::SecretString;

/// Default base URL for the public OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for a plain OpenAI-compatible endpoint.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-4o").
    pub model: String,
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

/// Settings for an Azure OpenAI deployment.
pub struct AzureOpenAiConfig {
    /// Resource root, e.g. `https://{instance}.openai.azure.com`.
    pub api_base: String,
    pub deployment: String,
    pub api_version: String,
    pub api_key: SecretString,
}

impl AzureOpenAiConfig {
    /// Settings for the resource named `instance_name`.
    pub fn for_instance(
        instance_name: &str,
        deployment: &str,
        api_version: &str,
        api_key: SecretString,
    ) -> Self {
        Self {
            api_base: instance_base_url(instance_name),
            deployment: deployment.into(),
            api_version: api_version.into(),
            api_key,
        }
    }
}

/// Resource root URL of an Azure OpenAI instance.
pub fn instance_base_url(instance_name: &str) -> String {
    format!("https://{instance_name}.openai.azure.com")
}
