//! Wire shapes of the HTTP responses.

use serde::Serialize;

use crate::app::GeneratedSystemPrompt;
use crate::domain::AppError;

/// Response body of `POST /generate-system-prompt`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    #[serde(rename_all = "camelCase")]
    Success {
        success: bool,
        system_prompt: String,
        context_hash: String,
        model: String,
        timestamp: String,
    },
    Failure {
        success: bool,
        error: String,
        fallback: bool,
    },
}

impl GenerateResponse {
    pub fn success(generated: &GeneratedSystemPrompt) -> Self {
        Self::Success {
            success: true,
            system_prompt: generated.system_prompt.clone(),
            context_hash: generated.context_hash.clone(),
            model: generated.model.clone(),
            timestamp: generated.generated_at.to_rfc3339(),
        }
    }

    pub fn failure(error: &AppError) -> Self {
        Self::failure_message(error.to_string())
    }

    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::Failure { success: false, error: message.into(), fallback: true }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn success_serializes_camel_case() {
        let generated = GeneratedSystemPrompt {
            system_prompt: "prompt".to_string(),
            context_hash: "abcd".to_string(),
            model: "modelo".to_string(),
            generated_at: Utc::now(),
        };
        let value = serde_json::to_value(GenerateResponse::success(&generated)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["systemPrompt"], "prompt");
        assert_eq!(value["contextHash"], "abcd");
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn failure_carries_the_error_message() {
        let value =
            serde_json::to_value(GenerateResponse::failure(&AppError::EmptyContext)).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["fallback"], true);
        assert!(value["error"].as_str().unwrap().contains("context"));
    }
}
