//! Short code generation.
//!
//! Codes are drawn uniformly from `[A-Za-z0-9]`, giving 62^6 (about 5.6e10)
//! possible values at the default length.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric short code of [`CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
///
/// Used by the redirect and stats handlers to answer 404 without locking
/// the store for obviously foreign paths.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generated_codes_are_valid() {
        assert!(is_valid_code(&generate_code()));
    }

    #[test]
    fn test_is_valid_code_rejects_wrong_length() {
        assert!(!is_valid_code("abc12"));
        assert!(!is_valid_code("abc1234"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn test_is_valid_code_rejects_symbols() {
        assert!(!is_valid_code("abc-12"));
        assert!(!is_valid_code("abc_12"));
        assert!(!is_valid_code("abc 12"));
    }

    #[test]
    fn test_is_valid_code_rejects_non_ascii() {
        assert!(!is_valid_code("abcdé1"));
    }
}
