use std::io;

use thiserror::Error;

/// Library-wide error type for copydrive operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("{0} environment variable not set")]
    EnvironmentVariableMissing(String),

    /// Neither compiler produced any context to send downstream.
    #[error(
        "No copy context available: provide a copy type, project identity, audience or offer"
    )]
    EmptyContext,

    /// Chat gateway call failed (transport error or non-2xx response).
    #[error("Chat API request failed: {message}")]
    ChatApi {
        message: String,
        /// Upstream HTTP status, when the request got that far.
        status: Option<u16>,
    },

    /// Prompt store write failed.
    #[error("Prompt store error: {0}")]
    Store(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether this failure should be reported as an authorization problem.
    ///
    /// Upstream 401/403 responses and messages carrying the gateway's
    /// authorization wording map to HTTP 401; everything else is a 500.
    pub fn is_auth_shaped(&self) -> bool {
        if let AppError::ChatApi { status: Some(code), .. } = self
            && (*code == 401 || *code == 403)
        {
            return true;
        }

        let message = self.to_string();
        message.contains("Unauthorized") || message.contains("Missing authorization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_401_is_auth_shaped() {
        let err = AppError::ChatApi { message: "denied".to_string(), status: Some(401) };
        assert!(err.is_auth_shaped());
    }

    #[test]
    fn unauthorized_message_is_auth_shaped() {
        let err = AppError::Configuration("Unauthorized: bad apikey".to_string());
        assert!(err.is_auth_shaped());
    }

    #[test]
    fn empty_context_is_not_auth_shaped() {
        assert!(!AppError::EmptyContext.is_auth_shaped());
        assert!(AppError::EmptyContext.to_string().contains("context"));
    }

    #[test]
    fn upstream_500_is_not_auth_shaped() {
        let err = AppError::ChatApi { message: "boom".to_string(), status: Some(500) };
        assert!(!err.is_auth_shaped());
    }
}
