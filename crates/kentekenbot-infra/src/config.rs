//! Service configuration loader for Kentekenbot.
//!
//! Reads `kentekenbot.toml` and deserializes it into [`ServiceConfig`]. Falls
//! back to defaults when the file is missing or malformed, then applies
//! environment overrides (`AZURE_OPENAI_API_KEY`, `INSTANCE_NAME`,
//! `ENGINE_NAME`, `OPENAI_API_VERSION`, `RDW_API_BASE`).

use std::path::Path;

use secrecy::SecretString;

use kentekenbot_types::config::{LlmBackend, LlmConfig, ServiceConfig};
use kentekenbot_types::error::ConfigError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "kentekenbot.toml";

pub const AZURE_API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_VERSION_VAR: &str = "OPENAI_API_VERSION";
pub const INSTANCE_NAME_VAR: &str = "INSTANCE_NAME";
pub const DEPLOYMENT_VAR: &str = "ENGINE_NAME";
pub const REGISTRY_BASE_VAR: &str = "RDW_API_BASE";

/// Load service configuration from `path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_service_config(path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServiceConfig::default()
        }
    }
}

/// Load `path` and apply overrides from the process environment.
pub async fn load_with_env(path: &Path) -> ServiceConfig {
    let mut config = load_service_config(path).await;
    apply_env_overrides(&mut config, env_var);
    config
}

/// Overlay environment settings onto `config`.
///
/// `lookup` returns the value of a variable; empty values are ignored.
pub fn apply_env_overrides(config: &mut ServiceConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(version) = get(API_VERSION_VAR) {
        config.llm.api_version = version;
    }
    if let Some(instance) = get(INSTANCE_NAME_VAR) {
        config.llm.instance_name = Some(instance);
    }
    if let Some(deployment) = get(DEPLOYMENT_VAR) {
        config.llm.deployment = Some(deployment);
    }
    if let Some(base_url) = get(REGISTRY_BASE_VAR) {
        config.registry.base_url = base_url;
    }
}

/// Resolve the API key for the configured backend.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSetting`] naming the variable that must be set.
pub fn resolve_api_key(
    config: &LlmConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    let var = match config.backend {
        LlmBackend::Azure => AZURE_API_KEY_VAR,
        LlmBackend::OpenAi => OPENAI_API_KEY_VAR,
    };

    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingSetting(var.to_string()))
}

/// Read an environment variable, treating non-Unicode values as unset.
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
