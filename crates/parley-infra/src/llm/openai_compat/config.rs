//! Configuration for the OpenAI-compatible completion client.

use std::time::Duration;

use secrecy::SecretString;

use parley_types::config::ModelConfig;

/// Configuration for an [`super::OpenAiCompatibleProvider`].
///
/// `Debug` output redacts the key.
#[derive(Debug)]
pub struct OpenAiCompatConfig {
    /// Human-readable provider name used in logs.
    pub provider_name: String,
    /// API root; `/chat/completions` is appended.
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves it empty.
    pub model: String,
    /// Client-level timeout for the whole HTTP exchange.
    pub timeout: Duration,
}

impl OpenAiCompatConfig {
    /// Build from the `[model]` section of the service config.
    pub fn from_model_config(config: &ModelConfig, api_key: SecretString) -> Self {
        Self {
            provider_name: provider_name_for(&config.base_url),
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

fn provider_name_for(base_url: &str) -> String {
    if base_url.contains("kluster.ai") {
        "kluster".to_string()
    } else {
        "openai-compatible".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_model_config() {
        let config = OpenAiCompatConfig::from_model_config(
            &ModelConfig::default(),
            SecretString::from("k"),
        );
        assert_eq!(config.provider_name, "kluster");
        assert_eq!(config.base_url, "https://api.kluster.ai/v1");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn custom_base_url_is_generic() {
        let model = ModelConfig {
            base_url: "http://localhost:9000/v1".to_string(),
            ..ModelConfig::default()
        };
        let config = OpenAiCompatConfig::from_model_config(&model, SecretString::from("k"));
        assert_eq!(config.provider_name, "openai-compatible");
    }

    #[test]
    fn debug_redacts_key() {
        let config = OpenAiCompatConfig::from_model_config(
            &ModelConfig::default(),
            SecretString::from("sk-secret-value"),
        );
        assert!(!format!("{config:?}").contains("sk-secret-value"));
    }
}
