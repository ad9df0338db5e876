//! Deterministic fingerprint of compiled prompt text.

use sha2::{Digest, Sha256};

/// Length of the hex fingerprint.
pub const CONTEXT_HASH_LEN: usize = 16;

/// Fingerprint the compiled project and copy prompts.
///
/// Used as a cache/identity key for a generation request, not as an
/// integrity guarantee. Same inputs always produce the same output; the
/// function is total, empty inputs included.
pub fn context_hash(project_prompt: &str, copy_prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(project_prompt.as_bytes());
    hasher.update(b"||");
    hasher.update(copy_prompt.as_bytes());
    let digest = hasher.finalize();

    digest.iter().take(CONTEXT_HASH_LEN / 2).map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_yield_identical_hashes() {
        assert_eq!(context_hash("projeto", "copy"), context_hash("projeto", "copy"));
    }

    #[test]
    fn any_change_yields_a_different_hash() {
        let base = context_hash("projeto", "copy");
        assert_ne!(base, context_hash("projeto", "copyx"));
        assert_ne!(base, context_hash("projetox", "copy"));
    }

    #[test]
    fn swapping_halves_changes_the_hash() {
        assert_ne!(context_hash("a", "b"), context_hash("b", "a"));
    }

    #[test]
    fn empty_input_is_supported() {
        let hash = context_hash("", "");
        assert_eq!(hash.len(), CONTEXT_HASH_LEN);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
