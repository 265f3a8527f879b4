//! Application state wiring the orchestrator to its store and provider.
//!
//! The orchestrator is generic over store/provider traits; AppState pins it
//! to the in-memory store and the type-erased provider so tests can swap in
//! a scripted provider behind the same type.

use std::sync::Arc;

use parley_core::chat::prompt::render_system_prompt;
use parley_core::chat::service::{ChatOrchestrator, ChatSettings};
use parley_core::llm::box_provider::BoxLlmProvider;
use parley_core::session::memory::InMemorySessionStore;
use parley_infra::catalog::resolve_catalog;
use parley_infra::llm::create_provider;
use parley_infra::secret::resolve_api_key;
use parley_types::config::ServiceConfig;

/// Orchestrator pinned to the concrete store and the boxed provider.
pub type ConcreteChatOrchestrator = ChatOrchestrator<InMemorySessionStore, BoxLlmProvider>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ConcreteChatOrchestrator>,
    /// Reported by `/health`.
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(chat: ConcreteChatOrchestrator, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            chat: Arc::new(chat),
            service_name: service_name.into(),
        }
    }

    /// Build the production state from configuration.
    ///
    /// Fails when the API credential is missing or the config is inconsistent.
    pub fn init(config: &ServiceConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(&config.model.api_key_env)?;
        let provider = create_provider(&config.model, api_key)?;

        let catalog = resolve_catalog(config)?;
        tracing::info!(
            brand = %catalog.brand,
            products = catalog.products.len(),
            faq = catalog.faq.len(),
            "catalog loaded"
        );
        let system_prompt: Arc<str> = render_system_prompt(&catalog).into();

        let settings = ChatSettings::from_config(config)?;
        let chat = ChatOrchestrator::new(
            InMemorySessionStore::new(),
            provider,
            system_prompt,
            settings,
        );

        Ok(Self::new(chat, config.service_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_without_credential_fails() {
        let mut config = ServiceConfig::default();
        config.model.api_key_env = "PARLEY_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        let err = AppState::init(&config).err().unwrap();
        assert!(err.to_string().contains("PARLEY_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
