//! Context compilation entry point over the two prompt compilers.

use crate::domain::{compile_copy_prompt, compile_project_prompt, context_hash};

use super::request::GenerateRequest;

/// Both compiled prompt blocks plus their fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledContext {
    pub project_prompt: String,
    pub copy_prompt: String,
    pub context_hash: String,
}

impl CompiledContext {
    /// True when neither compiler produced anything.
    pub fn is_empty(&self) -> bool {
        self.project_prompt.is_empty() && self.copy_prompt.is_empty()
    }

    /// The context block sent downstream: project first, copy second,
    /// blank-line separated, with no residue from an empty half.
    pub fn combined(&self) -> String {
        match (self.project_prompt.is_empty(), self.copy_prompt.is_empty()) {
            (false, false) => format!("{}\n\n{}", self.project_prompt, self.copy_prompt),
            (false, true) => self.project_prompt.clone(),
            (true, _) => self.copy_prompt.clone(),
        }
    }
}

/// Run both compilers against a request and fingerprint the result.
pub fn compile_context(request: &GenerateRequest) -> CompiledContext {
    let project_prompt = compile_project_prompt(
        request.project_identity.as_ref(),
        request.methodology.as_ref(),
    );
    let copy_prompt = compile_copy_prompt(
        &request.brief,
        request.audience_segment.as_ref(),
        request.offer.as_ref(),
    );
    let context_hash = context_hash(&project_prompt, &copy_prompt);

    CompiledContext { project_prompt, copy_prompt, context_hash }
}

#[cfg(test)]
mod tests {
    use crate::domain::{CopyBrief, ProjectIdentity};

    use super::*;

    #[test]
    fn combined_joins_project_before_copy() {
        let request = GenerateRequest {
            brief: CopyBrief { copy_type: Some("email".to_string()), ..Default::default() },
            project_identity: Some(ProjectIdentity {
                brand_name: Some("Acme".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let compiled = compile_context(&request);
        let combined = compiled.combined();

        let identity_at = combined.find("## IDENTIDADE DA MARCA").unwrap();
        let type_at = combined.find("## TIPO DE COPY").unwrap();
        assert!(identity_at < type_at);
        assert!(!combined.starts_with('\n'));
    }

    #[test]
    fn empty_request_compiles_to_empty_context() {
        let compiled = compile_context(&GenerateRequest::default());
        assert!(compiled.is_empty());
        assert_eq!(compiled.combined(), "");
        assert_eq!(compiled.context_hash.len(), 16);
    }

    #[test]
    fn hash_tracks_the_compiled_halves() {
        let base = compile_context(&GenerateRequest {
            brief: CopyBrief { copy_type: Some("email".to_string()), ..Default::default() },
            ..Default::default()
        });
        let other = compile_context(&GenerateRequest {
            brief: CopyBrief { copy_type: Some("vsl".to_string()), ..Default::default() },
            ..Default::default()
        });
        assert_ne!(base.context_hash, other.context_hash);
    }
}
