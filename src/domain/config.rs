//! Runtime configuration, read from the environment.

use url::Url;

use super::error::AppError;
use super::fallback::{FALLBACK_CONTEXT_MAX_CHARS, MIN_COMPLETION_CHARS};

/// Bearer credential for the chat gateway.
pub const LLM_API_KEY_ENV: &str = "COPYDRIVE_LLM_API_KEY";
/// Chat-completion endpoint override.
pub const LLM_API_URL_ENV: &str = "COPYDRIVE_LLM_API_URL";
/// Model identifier override.
pub const LLM_MODEL_ENV: &str = "COPYDRIVE_LLM_MODEL";
/// Base URL of the persistence store (optional).
pub const STORE_URL_ENV: &str = "COPYDRIVE_STORE_URL";
/// Service credential for the persistence store (optional).
pub const STORE_SERVICE_KEY_ENV: &str = "COPYDRIVE_STORE_SERVICE_KEY";

/// Chat gateway settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Chat-completion endpoint URL.
    pub api_url: Url,
    /// Model identifier requested from the gateway.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum attempts for transient gateway failures.
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 60,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default gateway URL must be valid")
}

/// Persistence store settings. Absent entirely when the store credentials
/// are not configured; persistence then degrades to a no-op.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: Url,
    pub service_key: String,
}

/// Thresholds of the generation pipeline.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Completions shorter than this trigger the local fallback.
    pub min_completion_chars: usize,
    /// How much compiled context the fallback template embeds.
    pub fallback_context_max_chars: usize,
    /// Completion length requested from the gateway.
    pub max_completion_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_completion_chars: MIN_COMPLETION_CHARS,
            fallback_context_max_chars: FALLBACK_CONTEXT_MAX_CHARS,
            max_completion_tokens: 1024,
        }
    }
}

/// Full service configuration.
///
/// `from_env` never fails on a missing gateway credential: the credential is
/// validated per request so the HTTP surface can report it with the
/// documented error shape instead of refusing to boot.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub llm_api_key: Option<String>,
    pub store: Option<StoreConfig>,
    pub generation: GenerationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let mut gateway = GatewayConfig::default();

        if let Some(value) = env_non_blank(LLM_API_URL_ENV) {
            gateway.api_url = parse_url(LLM_API_URL_ENV, &value)?;
        }
        if let Some(value) = env_non_blank(LLM_MODEL_ENV) {
            gateway.model = value;
        }

        let store = match (env_non_blank(STORE_URL_ENV), env_non_blank(STORE_SERVICE_KEY_ENV)) {
            (Some(url), Some(service_key)) => {
                Some(StoreConfig { base_url: parse_url(STORE_URL_ENV, &url)?, service_key })
            }
            _ => None,
        };

        Ok(Self {
            gateway,
            llm_api_key: env_non_blank(LLM_API_KEY_ENV),
            store,
            generation: GenerationConfig::default(),
        })
    }
}

fn env_non_blank(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_url(key: &str, value: &str) -> Result<Url, AppError> {
    Url::parse(value).map_err(|e| AppError::config_error(format!("Invalid {key}: {e}")))
}
