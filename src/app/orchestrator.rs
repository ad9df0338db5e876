//! The generation pipeline: compile, hash, ask the gateway, recover, persist.

use chrono::{DateTime, Utc};

use crate::domain::{AppError, SYSTEM_PROMPT_INSTRUCTION, fallback_system_prompt};
use crate::ports::{ChatRequest, PromptRecord};

use super::compile::compile_context;
use super::context::AppContext;
use super::request::GenerateRequest;

/// The final text artifact returned to the caller.
#[derive(Debug, Clone)]
pub struct GeneratedSystemPrompt {
    pub system_prompt: String,
    pub context_hash: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

/// Generate a system prompt for one request.
///
/// Fatal failures: missing gateway credential (context construction), empty
/// compiled context, and gateway transport/status errors. A degenerate
/// completion is not fatal: it is replaced by the deterministic local
/// fallback, so every request that reaches the gateway returns a usable
/// prompt. The persistence write never affects the outcome.
pub fn generate_system_prompt(
    ctx: &AppContext,
    request: &GenerateRequest,
) -> Result<GeneratedSystemPrompt, AppError> {
    let compiled = compile_context(request);
    if compiled.is_empty() {
        return Err(AppError::EmptyContext);
    }
    let context = compiled.combined();

    let completion = ctx.chat().complete(ChatRequest {
        system: SYSTEM_PROMPT_INSTRUCTION.to_string(),
        user: context.clone(),
        max_tokens: ctx.generation().max_completion_tokens,
    })?;

    let trimmed = completion.content.trim();
    let system_prompt = if trimmed.chars().count() < ctx.generation().min_completion_chars {
        tracing::warn!(
            completion_chars = trimmed.chars().count(),
            threshold = ctx.generation().min_completion_chars,
            "gateway completion unusable, substituting local fallback"
        );
        fallback_system_prompt(&context, ctx.generation().fallback_context_max_chars)
    } else {
        trimmed.to_string()
    };

    let generated = GeneratedSystemPrompt {
        system_prompt,
        context_hash: compiled.context_hash,
        model: completion.model,
        generated_at: Utc::now(),
    };

    persist_best_effort(ctx, request, &generated);

    Ok(generated)
}

/// Upsert the generated prompt when a copy id was supplied. Failures are
/// logged and swallowed: the prompt is already computed and must still be
/// returned.
fn persist_best_effort(
    ctx: &AppContext,
    request: &GenerateRequest,
    generated: &GeneratedSystemPrompt,
) {
    let Some(copy_id) =
        request.copy_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    else {
        return;
    };

    let record = PromptRecord {
        copy_id: copy_id.to_string(),
        system_prompt: generated.system_prompt.clone(),
        context_hash: generated.context_hash.clone(),
        generated_at: generated.generated_at,
        model: generated.model.clone(),
    };

    if let Err(error) = ctx.store().upsert_system_prompt(&record) {
        tracing::warn!(%error, copy_id, "failed to persist generated system prompt");
    }
}
