//! Prompt helpers: fingerprinting and bounded prefixes.

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    format!("{:x}", Sha256::digest(prompt.as_bytes()))
}

/// Borrow at most `max_chars` characters from the start of `text`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("test prompt");
        let second = hash_prompt("test prompt");
        let different = hash_prompt("another prompt");

        assert_eq!(first, second);
        assert_ne!(first, different);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_char_prefix_shorter_than_limit() {
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("", 10), "");
    }

    #[test]
    fn test_char_prefix_truncates_on_char_boundary() {
        assert_eq!(char_prefix("héllo wörld", 7), "héllo w");
        assert_eq!(char_prefix("日本語テキスト", 3), "日本語");
    }
}
