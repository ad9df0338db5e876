mod chat_client;
mod prompt_store;

pub use chat_client::{ChatClient, ChatCompletion, ChatRequest};
pub use prompt_store::{NoopPromptStore, PromptRecord, PromptStore};
