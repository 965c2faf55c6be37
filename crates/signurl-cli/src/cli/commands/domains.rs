//! `signurl domains` – print trusted and auth-required domains.

use signurl_core::config::SignurlConfig;
use signurl_core::domain::DomainPolicy;

pub fn run_domains(cfg: &SignurlConfig, whitelist: Option<&str>) {
    let raw = whitelist
        .or(cfg.whitelisted_domains.as_deref())
        .unwrap_or("");
    let policy = DomainPolicy::from_whitelist(raw);

    println!("Trusted domains:");
    for d in policy.trusted_domains() {
        println!("  {d}");
    }
    println!("Auth-required domains:");
    let auth = policy.auth_required_domains();
    if auth.is_empty() {
        println!("  (none)");
    }
    for d in auth {
        println!("  {d}");
    }
}
