//! Scripted provider and state builders shared by handler tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use parley_core::chat::service::{ChatOrchestrator, ChatSettings};
use parley_core::llm::box_provider::BoxLlmProvider;
use parley_core::llm::provider::LlmProvider;
use parley_core::session::memory::InMemorySessionStore;
use parley_types::config::ServiceConfig;
use parley_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use crate::state::{AppState, ConcreteChatOrchestrator};

pub const TEST_PROMPT: &str = "test system prompt";

/// What the scripted provider does on every call.
#[derive(Clone)]
pub enum Script {
    Reply(String),
    Status(u16),
    Timeout,
    Shape,
}

pub struct ScriptedProvider {
    script: Script,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn reply(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Reply(text) => Ok(CompletionResponse {
                id: None,
                content: text.clone(),
                model: None,
                usage: None,
            }),
            Script::Status(status) => Err(LlmError::Status {
                status: *status,
                body: "secret upstream body".to_string(),
            }),
            Script::Timeout => Err(LlmError::Timeout(Duration::from_secs(15))),
            Script::Shape => Err(LlmError::UnexpectedResponse("response has no choices".to_string())),
        }
    }
}

/// Orchestrator over a fresh store with default settings, adjusted by `tweak`.
pub fn orchestrator_with(
    provider: ScriptedProvider,
    tweak: impl FnOnce(&mut ChatSettings),
) -> ConcreteChatOrchestrator {
    let mut settings = ChatSettings::from_config(&ServiceConfig::default()).unwrap();
    tweak(&mut settings);
    ChatOrchestrator::new(
        InMemorySessionStore::new(),
        BoxLlmProvider::new(provider),
        TEST_PROMPT,
        settings,
    )
}

pub fn test_state(provider: ScriptedProvider) -> AppState {
    AppState::new(orchestrator_with(provider, |_| {}), "Test Chatbot API")
}
