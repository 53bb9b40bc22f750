//! URL cleaning for suffix resolution.

use crate::config::{HTTPS_SCHEME, HTTP_SCHEME};
use crate::error_handling::ClassifyError;

/// Reduces a media-list URL to its bare `host[:port]` part.
///
/// Strips the `http://` or `https://` scheme, every trailing `/`, the query
/// string and any path. Case, ports and IDN labels are left untouched.
///
/// # Errors
///
/// Returns `ClassifyError::InvalidScheme` for any other prefix, including
/// `data:` and `about:blank` pseudo-URLs and scheme-less text.
///
/// # Examples
///
/// ```
/// use media_classifier::url::clean_url;
///
/// assert_eq!(clean_url("https://www.example.com/news/?id=3").unwrap(), "www.example.com");
/// assert!(clean_url("ftp://example.com").is_err());
/// ```
pub fn clean_url(line: &str) -> Result<&str, ClassifyError> {
    let rest = line
        .strip_prefix(HTTP_SCHEME)
        .or_else(|| line.strip_prefix(HTTPS_SCHEME))
        .ok_or_else(|| ClassifyError::InvalidScheme(line.to_string()))?;

    let rest = rest.trim_end_matches('/');
    let rest = match rest.find('?') {
        Some(pos) => &rest[..pos],
        None => rest,
    };

    Ok(rest.split('/').next().unwrap_or_default())
}
