//! Deterministic local fallback for degenerate gateway completions.

/// Completions shorter than this are discarded in favor of the local
/// fallback. Carried over from the original product behavior; override via
/// `GenerationConfig` rather than editing here.
pub const MIN_COMPLETION_CHARS: usize = 100;

/// How much of the compiled context the fallback template embeds.
pub const FALLBACK_CONTEXT_MAX_CHARS: usize = 4000;

const FALLBACK_PREAMBLE: &str = "Você é um copywriter sênior especializado em copies de alta \
                                 conversão. Siga rigorosamente o contexto do projeto abaixo ao \
                                 escrever qualquer copy.";

const FALLBACK_RULES: &str = "Regras: mantenha a voz da marca quando definida; sustente cada \
                              promessa com as provas disponíveis no contexto; escreva em \
                              português brasileiro; finalize sempre com uma chamada para ação \
                              clara e específica.";

/// Build a usable system prompt without any network call.
///
/// Embeds up to `max_context_chars` characters of the compiled context
/// (char-boundary safe) between a fixed preamble and fixed quality rules.
/// The result is always well above [`MIN_COMPLETION_CHARS`].
pub fn fallback_system_prompt(context: &str, max_context_chars: usize) -> String {
    let excerpt: String = context.chars().take(max_context_chars).collect();
    let excerpt = excerpt.trim();

    if excerpt.is_empty() {
        format!("{FALLBACK_PREAMBLE}\n\n{FALLBACK_RULES}")
    } else {
        format!("{FALLBACK_PREAMBLE}\n\n{excerpt}\n\n{FALLBACK_RULES}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_never_below_the_completion_threshold() {
        let empty = fallback_system_prompt("", FALLBACK_CONTEXT_MAX_CHARS);
        assert!(empty.chars().count() >= MIN_COMPLETION_CHARS);

        let small = fallback_system_prompt("## TIPO DE COPY\nx", FALLBACK_CONTEXT_MAX_CHARS);
        assert!(small.chars().count() >= MIN_COMPLETION_CHARS);
    }

    #[test]
    fn context_is_embedded_verbatim() {
        let prompt =
            fallback_system_prompt("## TIPO DE COPY\nEscreva um e-mail.", FALLBACK_CONTEXT_MAX_CHARS);
        assert!(prompt.contains("## TIPO DE COPY\nEscreva um e-mail."));
    }

    #[test]
    fn oversized_context_is_truncated_on_a_char_boundary() {
        let context = "çã".repeat(4000);
        let prompt = fallback_system_prompt(&context, FALLBACK_CONTEXT_MAX_CHARS);
        let embedded = prompt.matches('ç').count();
        assert_eq!(embedded, FALLBACK_CONTEXT_MAX_CHARS / 2);
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(
            fallback_system_prompt("contexto", FALLBACK_CONTEXT_MAX_CHARS),
            fallback_system_prompt("contexto", FALLBACK_CONTEXT_MAX_CHARS),
        );
    }
}
