//! Input URL cleanup before handing it to a provider.
//!
//! Providers receive the caller's text as typed, minus surrounding whitespace
//! and with a scheme added when missing. The parsed form is only used to
//! reject garbage; it is never re-serialized.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Trims `input`, prefixes `https://` when it lacks an HTTP(S) scheme, and
/// checks that the result parses.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input and
/// [`UrlNormalizationError::InvalidFormat`] when the cleaned text does not
/// parse as a URL with a host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("  example.com/a ").unwrap(), "https://example.com/a");
/// assert_eq!(normalize_url("http://example.com").unwrap(), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let cleaned = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed =
        Url::parse(&cleaned).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_https_input_verbatim() {
        assert_eq!(
            normalize_url("https://www.roblox.com/users/1/profile").unwrap(),
            "https://www.roblox.com/users/1/profile"
        );
    }

    #[test]
    fn test_normalize_keeps_http_scheme() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_normalize_adds_https_scheme() {
        assert_eq!(
            normalize_url("example.com/path?q=1").unwrap(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_normalize_trims_before_prefixing() {
        for raw in ["  example.com ", "\texample.com\n", "example.com"] {
            assert_eq!(
                normalize_url(raw).unwrap(),
                format!("https://{}", raw.trim())
            );
        }
    }

    #[test]
    fn test_normalize_does_not_reserialize() {
        // Url::to_string would append a trailing slash and lowercase the host.
        assert_eq!(
            normalize_url("https://EXAMPLE.com").unwrap(),
            "https://EXAMPLE.com"
        );
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(matches!(
            normalize_url("   ").unwrap_err(),
            UrlNormalizationError::Empty
        ));
    }

    #[test]
    fn test_normalize_rejects_spaces_in_host() {
        assert!(matches!(
            normalize_url("not a valid url").unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_rejects_scheme_only() {
        assert!(normalize_url("https://").is_err());
    }
}
