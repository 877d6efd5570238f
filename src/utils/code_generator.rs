//! Random code generation for demo links and cosmetic labels.
//!
//! Nothing generated here is a real short code: no upstream knows about it and
//! it is never stored.

use rand::Rng;

/// Alphabet of generated codes: digits and lowercase ASCII letters.
const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the code in synthetic demo URLs.
pub const DEMO_CODE_LENGTH: usize = 6;

/// Generates `len` random base36 characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

/// Builds `https://{domain}/{6-char code}`.
pub fn demo_short_url(domain: &str) -> String {
    format!(
        "https://{}/{}",
        domain.trim_end_matches('/'),
        generate_code(DEMO_CODE_LENGTH)
    )
}

/// Random integer in `0..upper`, used for cosmetic numeric ids.
pub fn random_id(upper: u64) -> u64 {
    rand::rng().random_range(0..upper.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_length_and_alphabet() {
        for len in [0, 1, 6, 32] {
            let code = generate_code(len);
            assert_eq!(code.len(), len);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn test_demo_short_url_shape() {
        let url = demo_short_url("short.ly");
        let code = url.strip_prefix("https://short.ly/").unwrap();
        assert_eq!(code.len(), DEMO_CODE_LENGTH);
    }

    #[test]
    fn test_random_id_bounds() {
        for _ in 0..100 {
            assert!(random_id(10) < 10);
        }
        assert_eq!(random_id(0), 0);
    }
}
