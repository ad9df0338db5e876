use crate::adapters::{HttpChatClient, HttpPromptStore, RetryPolicy, RetryingChatClient};
use crate::domain::{AppConfig, AppError, GenerationConfig, LLM_API_KEY_ENV};
use crate::ports::{ChatClient, NoopPromptStore, PromptStore};

/// Application context holding the ports the orchestrator runs against.
pub struct AppContext {
    chat: Box<dyn ChatClient>,
    store: Box<dyn PromptStore>,
    generation: GenerationConfig,
}

impl AppContext {
    /// Create a context from explicit port implementations.
    pub fn new(
        chat: Box<dyn ChatClient>,
        store: Box<dyn PromptStore>,
        generation: GenerationConfig,
    ) -> Self {
        Self { chat, store, generation }
    }

    /// Wire the production adapters from configuration.
    ///
    /// The gateway credential is required here, per request, so a missing
    /// key surfaces through the documented error shape. Missing store
    /// credentials degrade persistence to a no-op instead.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let api_key = config
            .llm_api_key
            .clone()
            .ok_or_else(|| AppError::EnvironmentVariableMissing(LLM_API_KEY_ENV.to_string()))?;

        let http = HttpChatClient::new(api_key, &config.gateway)?;
        let chat =
            RetryingChatClient::new(Box::new(http), RetryPolicy::from_config(&config.gateway));

        let store: Box<dyn PromptStore> = match &config.store {
            Some(store_config) => {
                Box::new(HttpPromptStore::new(store_config, config.gateway.timeout_secs)?)
            }
            None => Box::new(NoopPromptStore),
        };

        Ok(Self::new(Box::new(chat), store, config.generation.clone()))
    }

    pub fn chat(&self) -> &dyn ChatClient {
        self.chat.as_ref()
    }

    pub fn store(&self) -> &dyn PromptStore {
        self.store.as_ref()
    }

    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_the_gateway_credential() {
        let config = AppConfig::default();
        let result = AppContext::from_config(&config);
        match result {
            Err(AppError::EnvironmentVariableMissing(name)) => {
                assert_eq!(name, LLM_API_KEY_ENV);
            }
            _ => panic!("expected missing credential error"),
        }
    }

    #[test]
    fn from_config_wires_a_noop_store_without_credentials() {
        let config =
            AppConfig { llm_api_key: Some("sk-test".to_string()), ..Default::default() };
        assert!(AppContext::from_config(&config).is_ok());
    }
}
