//! HTTP HEAD probing with redirects disabled.
//!
//! Uses the curl crate (libcurl) to issue one HEAD request and capture the
//! status code and `Location` header. Redirects are never followed: the first
//! hop is the answer.

mod error;
mod parse;

use std::collections::HashMap;
use std::str;
use std::time::Duration;

use crate::config::ProbeConfig;

pub use error::ProbeError;

/// Status and redirect target of an accepted HEAD response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u32,
    /// `Location` header value, verbatim.
    pub location: Option<String>,
}

/// A probe succeeds on `302` or any `2xx`.
pub fn is_accepted_status(code: u32) -> bool {
    code == 302 || (200..300).contains(&code)
}

/// One HEAD request against `url` with exactly the given headers.
///
/// Implementations block; callers on the async runtime use `spawn_blocking`.
pub trait Prober: Send + Sync {
    fn head(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<ProbeResponse, ProbeError>;
}

/// libcurl-backed [`Prober`] with bounded connect and total timeouts.
#[derive(Debug, Clone)]
pub struct CurlProber {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlProber {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

impl Default for CurlProber {
    fn default() -> Self {
        Self::new(&ProbeConfig::default())
    }
}

impl Prober for CurlProber {
    fn head(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<ProbeResponse, ProbeError> {
        let mut lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(false)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !is_accepted_status(code) {
            return Err(ProbeError::Http(code));
        }

        Ok(ProbeResponse {
            status: code,
            location: parse::location(&lines),
        })
    }
}
