//! Persistence port for generated system prompts.

use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// The persisted record for one generated system prompt, keyed by copy id.
#[derive(Debug, Clone)]
pub struct PromptRecord {
    pub copy_id: String,
    pub system_prompt: String,
    pub context_hash: String,
    pub generated_at: DateTime<Utc>,
    pub model: String,
}

/// Port for upserting generated prompts into the copy record.
pub trait PromptStore: Send + Sync {
    fn upsert_system_prompt(&self, record: &PromptRecord) -> Result<(), AppError>;
}

/// Store used when persistence credentials are not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPromptStore;

impl PromptStore for NoopPromptStore {
    fn upsert_system_prompt(&self, _record: &PromptRecord) -> Result<(), AppError> {
        Ok(())
    }
}
