//! Short code generation.
//!
//! Codes are drawn from the thread-local CSPRNG and contain only ASCII
//! letters and digits, so they are safe in a URL path without escaping.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Words that collide with fixed routes and must never be handed out.
const RESERVED_CODES: &[&str] = &["health", "shorten", "delete", "favicon.ico"];

/// Generates a random alphanumeric short code of `length` characters.
///
/// Uniqueness is not guaranteed here; the caller inserts the code and
/// regenerates on a store conflict.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` would shadow a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 8);
        assert_eq!(generate_code(6).len(), 6);
        assert_eq!(generate_code(32).len(), 32);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH))
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("health"));
        assert!(is_reserved("Shorten"));
        assert!(is_reserved("delete"));
        assert!(!is_reserved("abc123"));
    }
}
