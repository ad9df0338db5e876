pub mod catalogs;
pub mod config;
pub mod context_hash;
pub mod copy_brief;
pub mod copy_prompt;
pub mod error;
pub mod fallback;
mod fields;
pub mod instruction;
pub mod project;
pub mod project_prompt;

pub use config::{
    AppConfig, GatewayConfig, GenerationConfig, LLM_API_KEY_ENV, LLM_API_URL_ENV, LLM_MODEL_ENV,
    STORE_SERVICE_KEY_ENV, STORE_URL_ENV, StoreConfig,
};
pub use context_hash::{CONTEXT_HASH_LEN, context_hash};
pub use copy_brief::{AudienceSegment, CopyBrief, Demographics, Offer};
pub use copy_prompt::compile_copy_prompt;
pub use error::AppError;
pub use fallback::{FALLBACK_CONTEXT_MAX_CHARS, MIN_COMPLETION_CHARS, fallback_system_prompt};
pub use instruction::SYSTEM_PROMPT_INSTRUCTION;
pub use project::{ProjectIdentity, ProjectMethodology};
pub use project_prompt::compile_project_prompt;
