//! Service configuration types for Kentekenbot.
//!
//! `ServiceConfig` represents the `kentekenbot.toml` file. Every field has a
//! default so an empty (or missing) file yields a runnable configuration.
//! API keys are never part of this file; they are resolved from the
//! environment by the infrastructure layer.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::vehicle::RegistryErrorPolicy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Vehicle registry (RDW open data) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Endpoint queried with `?kenteken=<plate>`.
    #[serde(default = "default_registry_base_url")]
    pub base_url: String,
    #[serde(default = "default_registry_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub on_registry_error: RegistryErrorPolicy,
}

fn default_registry_base_url() -> String {
    "https://opendata.rdw.nl/resource/m9d7-ebf2.json".to_string()
}

fn default_registry_timeout_secs() -> u64 {
    10
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_registry_base_url(),
            timeout_secs: default_registry_timeout_secs(),
            on_registry_error: RegistryErrorPolicy::default(),
        }
    }
}

/// Which chat-completion backend to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmBackend {
    /// Azure OpenAI deployment (instance + deployment + api-version).
    #[default]
    Azure,
    /// Any OpenAI-compatible endpoint (base URL + model).
    #[serde(rename = "openai")]
    OpenAi,
}

impl fmt::Display for LlmBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmBackend::Azure => write!(f, "azure"),
            LlmBackend::OpenAi => write!(f, "openai"),
        }
    }
}

/// Language-model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub backend: LlmBackend,
    /// Model name sent with every request (ignored by Azure, which routes by deployment).
    #[serde(default = "default_model")]
    pub model: String,
    /// Azure resource name, i.e. `<instance>.openai.azure.com`.
    #[serde(default)]
    pub instance_name: Option<String>,
    /// Azure deployment name.
    #[serde(default)]
    pub deployment: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Base URL for the OpenAI-compatible backend.
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
    /// Replaces the built-in domain-scoping preamble when set.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_version() -> String {
    "2024-02-01".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_timeout_secs() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            backend: LlmBackend::default(),
            model: default_model(),
            instance_name: None,
            deployment: None,
            api_version: default_api_version(),
            base_url: default_openai_base_url(),
            max_tokens: None,
            temperature: None,
            timeout_secs: default_llm_timeout_secs(),
            system_prompt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.registry.timeout_secs, 10);
        assert_eq!(config.registry.on_registry_error, RegistryErrorPolicy::NoData);
        assert_eq!(config.llm.backend, LlmBackend::Azure);
        assert_eq!(config.llm.timeout_secs, 60);
        assert!(config.llm.system_prompt.is_none());
    }

    #[test]
    fn test_service_config_deserialize_empty() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.registry.base_url,
            "https://opendata.rdw.nl/resource/m9d7-ebf2.json"
        );
    }

    #[test]
    fn test_service_config_deserialize_with_values() {
        let toml_str = r#"
[server]
port = 8080

[registry]
timeout_secs = 3
on_registry_error = "skip"

[llm]
backend = "openai"
model = "gpt-4o-mini"
temperature = 0.2
"#;
        let config: ServiceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.registry.timeout_secs, 3);
        assert_eq!(config.registry.on_registry_error, RegistryErrorPolicy::Skip);
        assert_eq!(config.llm.backend, LlmBackend::OpenAi);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, Some(0.2));
        assert_eq!(config.llm.api_version, "2024-02-01");
    }
}
