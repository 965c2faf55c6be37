//! Host extraction and suffix matching.

use url::Url;

use crate::url_model::with_default_scheme;

/// Lowercased host of a user-supplied URL, or `None` when it does not parse.
pub fn extract_host(raw: &str) -> Option<String> {
    let candidate = with_default_scheme(raw);
    let parsed = Url::parse(&candidate).ok()?;
    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_ascii_lowercase())
}

/// True if `host` is `domain` or a subdomain of it.
pub fn host_matches(host: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Normalizes one whitelist entry: lowercase, without scheme, path, port or
/// trailing dot. Returns `None` for entries that end up empty.
pub fn normalize_domain_entry(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_ascii_lowercase();
    let rest = match lowered.split_once("://") {
        Some((_, rest)) => rest,
        None => lowered.trim_start_matches("//"),
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.split(':').next().unwrap_or("");
    let host = host.trim_matches('.');
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
