use std::collections::BTreeSet;

use tracing::debug;

use super::host::{extract_host, host_matches, normalize_domain_entry};
use crate::error::{ActionError, DomainOffender};
use crate::input::UrlBatch;

/// Domains that are always probed but never receive the credential.
///
/// `bubble.io` itself is deliberately absent: other tenants can serve content
/// under it.
pub const ALWAYS_TRUSTED: &[&str] = &["cdn.bubble.io"];

/// Trusted and auth-required domain sets for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPolicy {
    custom: BTreeSet<String>,
    always_trusted: BTreeSet<String>,
}

impl DomainPolicy {
    /// Builds the policy from the operator's comma-separated whitelist.
    ///
    /// Entries naming an always-trusted domain are dropped from the custom
    /// set, so listing the CDN never makes it auth-required.
    pub fn from_whitelist(raw: &str) -> Self {
        let always_trusted: BTreeSet<String> =
            ALWAYS_TRUSTED.iter().map(|d| d.to_string()).collect();
        let custom: BTreeSet<String> = raw
            .split(',')
            .filter_map(normalize_domain_entry)
            .filter(|d| !always_trusted.contains(d))
            .collect();
        debug!(custom = ?custom, "built domain policy");
        Self {
            custom,
            always_trusted,
        }
    }

    /// Host may be probed at all.
    pub fn is_trusted(&self, host: &str) -> bool {
        self.always_trusted
            .iter()
            .chain(self.custom.iter())
            .any(|d| host_matches(host, d))
    }

    /// Host receives `Authorization: Bearer …`. Custom domains only.
    pub fn requires_auth(&self, host: &str) -> bool {
        self.custom.iter().any(|d| host_matches(host, d))
    }

    /// Platform defaults first, then custom domains.
    pub fn trusted_domains(&self) -> Vec<String> {
        let mut out: Vec<String> = self.always_trusted.iter().cloned().collect();
        out.extend(self.custom.iter().cloned());
        out
    }

    pub fn auth_required_domains(&self) -> Vec<String> {
        self.custom.iter().cloned().collect()
    }

    /// Rejects the whole batch if any URL's host is not trusted.
    pub fn validate_batch(&self, batch: &UrlBatch) -> Result<(), ActionError> {
        let offenders: Vec<DomainOffender> = batch
            .iter()
            .enumerate()
            .filter_map(|(index, url)| {
                let domain = extract_host(url);
                let trusted = domain.as_deref().is_some_and(|h| self.is_trusted(h));
                (!trusted).then(|| DomainOffender {
                    index,
                    url: url.clone(),
                    domain,
                })
            })
            .collect();

        if offenders.is_empty() {
            return Ok(());
        }
        Err(ActionError::DomainViolation {
            offenders,
            allowed: self.trusted_domains(),
        })
    }
}
