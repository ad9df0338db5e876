//! Chat gateway client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GatewayConfig};
use crate::ports::{ChatClient, ChatCompletion, ChatRequest};

/// HTTP transport for the chat-completion gateway (OpenAI-compatible shape).
///
/// Performs a single request per call. Retry behavior is implemented by a
/// dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpChatClient {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GatewayConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ChatApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: String,
}

impl ChatClient for HttpChatClient {
    fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, AppError> {
        let api_request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage { role: "system", content: &request.system },
                ApiMessage { role: "user", content: &request.user },
            ],
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::ChatApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let detail = if body_text.trim().is_empty() {
                "no response body".to_string()
            } else {
                body_text
            };
            return Err(AppError::ChatApi {
                message: format!("gateway returned status {}: {}", status.as_u16(), detail),
                status: Some(status.as_u16()),
            });
        }

        let api_response: ApiResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::ChatApi {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        // A 2xx with no choices is degenerate output, not a transport
        // failure; the caller applies its fallback policy.
        let content = api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(ChatCompletion {
            content,
            model: api_response.model.unwrap_or_else(|| self.model.clone()),
        })
    }
}
