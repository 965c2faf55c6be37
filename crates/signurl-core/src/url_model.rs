//! URL scheme normalization and validation.
//!
//! Inputs may be bare (`files.acme.com/a.pdf`), protocol-relative
//! (`//files.acme.com/a.pdf`) or absolute. Everything is resolved over HTTPS;
//! explicit `http://` URLs are rejected before any request is made.

use std::borrow::Cow;

use url::Url;

use crate::error::ResolveError;

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Returns `raw` with an `https` scheme added when it has none.
///
/// Explicit `https…` and `http://` prefixes are left untouched, `//host/…`
/// becomes `https://host/…` and anything else gets `https://` prepended.
pub fn with_default_scheme(raw: &str) -> Cow<'_, str> {
    if has_prefix_ignore_case(raw, "https") || has_prefix_ignore_case(raw, "http://") {
        Cow::Borrowed(raw)
    } else if raw.starts_with("//") {
        Cow::Owned(format!("https:{raw}"))
    } else {
        Cow::Owned(format!("https://{raw}"))
    }
}

/// Normalizes a user-supplied URL for probing.
///
/// Fails with [`ResolveError::InsecureScheme`] for explicit `http://` URLs.
pub fn normalize_url(raw: &str) -> Result<String, ResolveError> {
    if has_prefix_ignore_case(raw, "http://") {
        return Err(ResolveError::InsecureScheme(raw.to_string()));
    }
    Ok(with_default_scheme(raw).into_owned())
}

/// Parses a normalized URL, reporting failures against the original input.
///
/// Only `https` URLs with a host are accepted.
pub fn parse_normalized(original: &str, normalized: &str) -> Result<Url, ResolveError> {
    let invalid = || ResolveError::InvalidUrl(original.to_string());
    let parsed = Url::parse(normalized).map_err(|_| invalid())?;
    if parsed.scheme() != "https" || parsed.host_str().is_none() {
        return Err(invalid());
    }
    Ok(parsed)
}
