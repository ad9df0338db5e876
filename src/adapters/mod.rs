mod chat_client_http;
mod chat_client_retrying;
mod prompt_store_http;

pub use chat_client_http::HttpChatClient;
pub use chat_client_retrying::{RetryPolicy, RetryingChatClient};
pub use prompt_store_http::HttpPromptStore;
