//! Service configuration types for Parley.
//!
//! `ServiceConfig` represents the optional `parley.toml` that controls the
//! listen address, the completion endpoint, the session window, and the
//! catalog content. Every field has a default matching production behavior.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Top-level configuration for the Parley service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name reported by `/health`.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub session: SessionConfig,

    /// Overrides the built-in catalog when present.
    #[serde(default)]
    pub catalog: Option<Catalog>,
}

fn default_service_name() -> String {
    "Museballer Chatbot API".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            server: ServerConfig::default(),
            model: ModelConfig::default(),
            session: SessionConfig::default(),
            catalog: None,
        }
    }
}

/// Listen address and CORS policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins echoed back in `Access-Control-Allow-Origin`.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://www.museballer.cl".to_string(),
        "https://museballer.cl".to_string(),
        "https://bio.museballer.cl".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Remote completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// OpenAI-compatible API root; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Hard bound on a single completion call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_base_url() -> String {
    "https://api.kluster.ai/v1".to_string()
}

fn default_model() -> String {
    "deepseek-ai/DeepSeek-V3-0324".to_string()
}

fn default_max_tokens() -> u32 {
    250
}

fn default_temperature() -> f64 {
    0.5
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_api_key_env() -> String {
    "KLUSTER_API_KEY".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Session lifetime and transcript window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle time after which a session is swept.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    /// Transcript length above which trimming kicks in.
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
    /// Leading turns always preserved (the system instruction).
    #[serde(default = "default_keep_head")]
    pub keep_head: usize,
    /// Most recent turns preserved after trimming.
    #[serde(default = "default_keep_tail")]
    pub keep_tail: usize,
    /// Interval of the background sweeper; 0 disables it.
    #[serde(default = "default_background_sweep_secs")]
    pub background_sweep_secs: u64,
}

fn default_idle_timeout_secs() -> u64 {
    30 * 60
}

fn default_max_turns() -> usize {
    9
}

fn default_keep_head() -> usize {
    1
}

fn default_keep_tail() -> usize {
    8
}

fn default_background_sweep_secs() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            max_turns: default_max_turns(),
            keep_head: default_keep_head(),
            keep_tail: default_keep_tail(),
            background_sweep_secs: default_background_sweep_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "Museballer Chatbot API");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.model.max_tokens, 250);
        assert!((config.model.temperature - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.model.timeout_secs, 15);
        assert_eq!(config.session.idle_timeout_secs, 1800);
        assert_eq!(config.session.max_turns, 9);
        assert_eq!(config.session.keep_head, 1);
        assert_eq!(config.session.keep_tail, 8);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_service_config_deserialize_empty() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.model, "deepseek-ai/DeepSeek-V3-0324");
        assert_eq!(config.server.allowed_origins.len(), 3);
    }

    #[test]
    fn test_service_config_deserialize_partial_sections() {
        let toml_str = r#"
service_name = "Test Bot"

[server]
port = 8080

[model]
base_url = "http://localhost:9000/v1"
timeout_secs = 5

[session]
idle_timeout_secs = 60

[catalog]
brand = "Acme"

[[catalog.products]]
name = "Widget"
price = "$10"
description = "A widget."

[[catalog.faq]]
topic = "Shipping"
answer = "Two days."
"#;
        let config: ServiceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service_name, "Test Bot");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.model.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model.timeout_secs, 5);
        assert_eq!(config.model.max_tokens, 250);
        assert_eq!(config.session.idle_timeout_secs, 60);
        assert_eq!(config.session.keep_tail, 8);

        let catalog = config.catalog.unwrap();
        assert_eq!(catalog.brand, "Acme");
        assert_eq!(catalog.products[0].name, "Widget");
        assert!(catalog.products[0].features.is_empty());
        assert_eq!(catalog.faq[0].topic, "Shipping");
    }
}
