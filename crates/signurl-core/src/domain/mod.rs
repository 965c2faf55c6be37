//! Domain whitelist: which hosts may be probed, and which of those receive
//! the bearer credential.
//!
//! The trusted set is the platform CDN plus the operator's custom domains.
//! The auth-required set is the custom domains alone, so the credential never
//! reaches hosts that merely live under the shared platform domain.

mod host;
mod policy;

pub use host::{extract_host, host_matches, normalize_domain_entry};
pub use policy::{DomainPolicy, ALWAYS_TRUSTED};
