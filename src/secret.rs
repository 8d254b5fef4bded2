use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use rand::Rng;
use tracing::warn;

use crate::entropy::random_bytes_with_rng;

/// Encodes raw bytes with the standard 64-symbol base64 alphabet, unpadded.
pub fn encode_secret(bytes: &[u8]) -> String {
    STANDARD_NO_PAD.encode(bytes)
}

/// Generates a random secret of exactly `length` printable characters.
///
/// The byte request scales with the requested length (`length * 8` bits), so
/// the encoded form always holds at least `length` characters and there is no
/// upper bound on `length`. A zero length yields `Some("")`.
pub fn secret(length: usize) -> Option<String> {
    secret_with_rng(&mut rand::rng(), length)
}

/// Same as [`secret`], drawing from the provided generator.
pub fn secret_with_rng(rng: &mut impl Rng, length: usize) -> Option<String> {
    if length == 0 {
        return Some(String::new());
    }
    let salt = random_bytes_with_rng(rng, length * 8);
    let mut encoded = encode_secret(&salt);
    encoded.truncate(length);
    Some(encoded)
}

/// Generates a secret with a uniformly random length in `[min, max)`.
///
/// Returns `None` when `min >= max`.
pub fn secret_in_range(min: usize, max: usize) -> Option<String> {
    secret_in_range_with_rng(&mut rand::rng(), min, max)
}

/// Same as [`secret_in_range`], drawing from the provided generator.
pub fn secret_in_range_with_rng(rng: &mut impl Rng, min: usize, max: usize) -> Option<String> {
    if min >= max {
        warn!(min, max, "secret length range is empty");
        return None;
    }
    let length = rng.random_range(min..max);
    secret_with_rng(rng, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE64_ALPHABET: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    #[test]
    fn secret_has_exact_length() {
        for length in [0, 1, 8, 44, 128] {
            let secret = secret(length).expect("secret should generate");
            assert_eq!(secret.chars().count(), length);
        }
    }

    #[test]
    fn secret_uses_base64_alphabet() {
        let secret = secret(256).expect("secret should generate");
        assert!(secret.chars().all(|c| BASE64_ALPHABET.contains(c)));
    }

    #[test]
    fn zero_length_secret_is_empty() {
        assert_eq!(secret(0).as_deref(), Some(""));
    }

    #[test]
    fn range_rejects_empty_interval() {
        assert_eq!(secret_in_range(8, 8), None);
        assert_eq!(secret_in_range(16, 8), None);
    }

    #[test]
    fn range_secret_length_is_within_bounds() {
        for _ in 0..50 {
            let secret = secret_in_range(8, 16).expect("range should generate");
            assert!((8..16).contains(&secret.chars().count()));
        }
    }

    #[test]
    fn encode_secret_matches_known_vector() {
        // "Man" encodes to "TWFu" in the standard alphabet.
        assert_eq!(encode_secret(b"Man"), "TWFu");
    }
}
