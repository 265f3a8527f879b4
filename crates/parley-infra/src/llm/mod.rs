//! Completion provider implementations.
//!
//! Contains the concrete [`LlmProvider`](parley_core::llm::provider::LlmProvider)
//! used in production and a factory that builds it from [`ModelConfig`].

pub mod openai_compat;

use secrecy::SecretString;

use parley_core::llm::box_provider::BoxLlmProvider;
use parley_types::config::ModelConfig;
use parley_types::error::ConfigError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Create the type-erased completion provider for `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if the HTTP client cannot be built.
pub fn create_provider(
    config: &ModelConfig,
    api_key: SecretString,
) -> Result<BoxLlmProvider, ConfigError> {
    let provider =
        OpenAiCompatibleProvider::new(OpenAiCompatConfig::from_model_config(config, api_key))?;
    tracing::info!(
        provider = provider.provider_name(),
        model = %config.model,
        base_url = %config.base_url,
        "completion provider configured"
    );
    Ok(BoxLlmProvider::new(provider))
}
