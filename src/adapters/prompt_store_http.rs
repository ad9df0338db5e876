//! Persistence adapter: row upsert against the workspace REST store.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use url::Url;

use crate::domain::{AppError, StoreConfig};
use crate::ports::{PromptRecord, PromptStore};

const COPIES_PATH: &str = "/rest/v1/copies";

/// PostgREST-style upsert into the `copies` table, keyed by copy id.
#[derive(Clone)]
pub struct HttpPromptStore {
    base_url: Url,
    service_key: String,
    client: Client,
}

impl std::fmt::Debug for HttpPromptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPromptStore")
            .field("base_url", &self.base_url)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpPromptStore {
    pub fn new(config: &StoreConfig, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Store(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            service_key: config.service_key.clone(),
            client,
        })
    }

    fn upsert_url(&self) -> Result<Url, AppError> {
        let mut url = self
            .base_url
            .join(COPIES_PATH)
            .map_err(|e| AppError::Store(format!("Invalid store URL: {}", e)))?;
        url.set_query(Some("on_conflict=id"));
        Ok(url)
    }
}

impl PromptStore for HttpPromptStore {
    fn upsert_system_prompt(&self, record: &PromptRecord) -> Result<(), AppError> {
        let body = json!({
            "id": record.copy_id,
            "generated_system_prompt": record.system_prompt,
            "system_prompt_context_hash": record.context_hash,
            "system_prompt_generated_at": record.generated_at.to_rfc3339(),
            "system_prompt_model": record.model,
        });

        let response = self
            .client
            .post(self.upsert_url()?)
            .header("apikey", &self.service_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&body)
            .send()
            .map_err(|e| AppError::Store(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body_text = response.text().unwrap_or_default();
        Err(AppError::Store(format!(
            "store returned status {}: {}",
            status.as_u16(),
            if body_text.trim().is_empty() { "no response body" } else { body_text.trim() },
        )))
    }
}
