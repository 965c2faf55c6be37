//! Per-URL redirect resolution.
//!
//! Normalize → validate → HEAD with policy headers → on failure HEAD again
//! without any headers → `Location` or the normalized URL.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::credential::Credential;
use crate::domain::DomainPolicy;
use crate::error::ResolveError;
use crate::fetch_head::Prober;
use crate::url_model::{normalize_url, parse_normalized};

/// Headers for the first attempt: `Authorization` only for auth-required hosts
/// and only when a credential is configured.
pub fn auth_headers(
    policy: &DomainPolicy,
    credential: &Credential,
    host: Option<&str>,
) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    let needs_auth = host.is_some_and(|h| policy.requires_auth(&h.to_ascii_lowercase()));
    if needs_auth && !credential.is_empty() {
        headers.insert("Authorization".to_string(), credential.bearer());
    }
    headers
}

/// Resolves one URL to its signed target.
///
/// The credential is sent on the first attempt at most; the fallback attempt
/// never carries it. The fallback's error is the one reported.
pub fn resolve_url(
    prober: &dyn Prober,
    policy: &DomainPolicy,
    credential: &Credential,
    raw: &str,
) -> Result<String, ResolveError> {
    let normalized = normalize_url(raw)?;
    let parsed = parse_normalized(raw, &normalized)?;
    // Probe the serialized form: the host checked here is the host libcurl contacts.
    let target = parsed.as_str();
    let headers = auth_headers(policy, credential, parsed.host_str());
    let authenticated = !headers.is_empty();

    trace!(url = target, authenticated, "probing");
    let response = match prober.head(target, &headers) {
        Ok(response) => response,
        Err(first) => {
            debug!(
                url = target,
                authenticated,
                error = %first,
                "first probe failed, retrying without credentials"
            );
            prober.head(target, &HashMap::new())?
        }
    };

    match response.location {
        Some(location) => {
            debug!(
                url = target,
                status = response.status,
                location = location.as_str(),
                "resolved redirect"
            );
            Ok(location)
        }
        None => {
            debug!(url = target, status = response.status, "no redirect, using url as-is");
            Ok(target.to_string())
        }
    }
}
