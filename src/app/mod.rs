mod compile;
mod context;
mod orchestrator;
mod request;

pub use compile::{CompiledContext, compile_context};
pub use context::AppContext;
pub use orchestrator::{GeneratedSystemPrompt, generate_system_prompt};
pub use request::GenerateRequest;
