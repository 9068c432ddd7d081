//! Target URL validation and sanitization for the shortener.

use url::Url;

/// Minimum length of the authority part (`user:pass@host:port`).
const MIN_AUTHORITY_LEN: usize = 3;

/// Reasons a target URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL must be a string")]
    NotAString,

    #[error("URL must not contain whitespace or control characters")]
    IllegalCharacter,

    #[error("URL must have a valid scheme and domain")]
    MissingSchemeOrDomain,

    #[error("URL must use http or https scheme")]
    UnsupportedScheme,

    #[error("URL must have a valid domain")]
    InvalidDomain,
}

/// Checks that `raw` is an absolute http/https URL with a plausible authority.
///
/// The input is stored verbatim after validation and later sent back as a
/// `Location` header, so the checks run on the raw text rather than on the
/// parser's normalized form.
///
/// # Rules
///
/// 1. Must not be empty
/// 2. Must not contain whitespace or control characters
/// 3. Must be `scheme://authority...` and parse as an absolute URL
/// 4. Scheme must be `http` or `https` (case-insensitive)
/// 5. Authority, as written, must be at least 3 characters
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://www.example.com").is_ok());
/// assert_eq!(validate_url("not-a-url"), Err(UrlValidationError::MissingSchemeOrDomain));
/// assert_eq!(validate_url("http:example.com"), Err(UrlValidationError::MissingSchemeOrDomain));
/// assert_eq!(validate_url("ftp://files.example.com"), Err(UrlValidationError::UnsupportedScheme));
/// ```
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::IllegalCharacter);
    }

    let (scheme, rest) = raw
        .split_once("://")
        .filter(|(scheme, _)| is_scheme(scheme))
        .ok_or(UrlValidationError::MissingSchemeOrDomain)?;

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if authority.is_empty() {
        return Err(UrlValidationError::MissingSchemeOrDomain);
    }

    let url = Url::parse(raw).map_err(|_| UrlValidationError::MissingSchemeOrDomain)?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingSchemeOrDomain);
    }

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    if authority.len() < MIN_AUTHORITY_LEN {
        return Err(UrlValidationError::InvalidDomain);
    }

    Ok(())
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Trims whitespace and prepends `https://` when no http(s) scheme is present.
///
/// The scheme check ignores case. The rest of the input is kept
/// byte-for-byte; no case folding or path normalization is applied.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
