//! Chat gateway port definition.

use crate::domain::AppError;

/// A single chat-completion request.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// System-role instruction.
    pub system: String,
    /// User-role content (the compiled context).
    pub user: String,
    /// Completion length cap.
    pub max_tokens: u32,
}

/// A successful chat completion.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    /// The completion text. May be empty or degenerate; callers decide
    /// whether it is usable.
    pub content: String,
    /// Model that produced the completion, as reported by the gateway.
    pub model: String,
}

/// Port for chat-completion calls.
pub trait ChatClient: Send + Sync {
    fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, AppError>;
}
