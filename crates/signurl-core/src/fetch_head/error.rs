//! Probe error type.

use std::fmt;

/// Error returned by a single HEAD attempt.
#[derive(Debug)]
pub enum ProbeError {
    /// Curl reported an error (timeout, connection, DNS, TLS, etc.).
    Curl(curl::Error),
    /// Response status was neither 302 nor 2xx.
    Http(u32),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Curl(e) => write!(f, "{}", e),
            ProbeError::Http(code) => write!(f, "Request failed with status code {}", code),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Curl(e) => Some(e),
            ProbeError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        ProbeError::Curl(e)
    }
}
