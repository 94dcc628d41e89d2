//! Short code and record id generation.
//!
//! Short codes are drawn uniformly from a fixed 65-symbol alphabet. Nothing here
//! guarantees uniqueness; collisions are detected by the record store and handled
//! by [`crate::application::services::RecordService`].

use rand::Rng;

/// Number of characters in a generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Symbols a short code is drawn from.
pub const SHORT_CODE_ALPHABET: &[u8] =
    b"-+=0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of random bytes in a record id before hex encoding.
const ID_LENGTH_BYTES: usize = 12;

/// Generates a random short code.
///
/// Each of the [`SHORT_CODE_LENGTH`] characters is picked independently from
/// [`SHORT_CODE_ALPHABET`] using the thread-local RNG.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..SHORT_CODE_LENGTH)
        .map(|_| SHORT_CODE_ALPHABET[rng.random_range(0..SHORT_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Generates an opaque record id: 12 random bytes, lowercase hex (24 chars).
pub fn generate_id() -> String {
    let bytes: [u8; ID_LENGTH_BYTES] = rand::random();
    hex::encode(bytes)
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| SHORT_CODE_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_65_distinct_symbols() {
        let distinct: HashSet<_> = SHORT_CODE_ALPHABET.iter().collect();
        assert_eq!(SHORT_CODE_ALPHABET.len(), 65);
        assert_eq!(distinct.len(), 65);
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), SHORT_CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_short_code(&code), "unexpected code {code:?}");
        }
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<_> = (0..1000).map(|_| generate_code()).collect();
        // 65^6 possible codes; a handful of duplicates in 1000 draws would be astonishing.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_generate_code_eventually_covers_symbols() {
        let seen: HashSet<u8> = (0..5000)
            .flat_map(|_| generate_code().into_bytes())
            .collect();
        assert_eq!(seen.len(), SHORT_CODE_ALPHABET.len());
    }

    #[test]
    fn test_generate_id_is_hex() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH_BYTES * 2);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_id_produces_unique_ids() {
        let ids: HashSet<_> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_is_short_code_rejects_bad_input() {
        assert!(is_short_code("ab+=-9"));
        assert!(!is_short_code("abc"));
        assert!(!is_short_code("abc_12"));
        assert!(!is_short_code("abcdefg"));
    }
}
