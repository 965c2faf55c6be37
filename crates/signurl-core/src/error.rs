//! Error taxonomy for one action invocation.
//!
//! Every variant ends up as the `error_message` of an
//! [`ActionResult::Error`](crate::action::ActionResult); the `Display` strings
//! below are the messages the host sees.

use thiserror::Error;

use crate::fetch_head::ProbeError;

/// Why a single URL could not be resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
    #[error("HTTPS is required: {0}")]
    InsecureScheme(String),
    /// Both the first attempt and the unauthenticated fallback failed.
    /// Carries the fallback's error.
    #[error("{0}")]
    ProbeFailed(#[from] ProbeError),
}

/// A failed URL, addressed by its position in the batch.
#[derive(Debug, Error)]
#[error("URL[{index}] \"{url}\": {error}")]
pub struct UrlFailure {
    pub index: usize,
    pub url: String,
    #[source]
    pub error: ResolveError,
}

/// A URL whose host is not in the trusted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOffender {
    pub index: usize,
    pub url: String,
    /// `None` when no host could be parsed out of the URL.
    pub domain: Option<String>,
}

impl std::fmt::Display for DomainOffender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "URL[{}] \"{}\" (domain: {})",
            self.index,
            self.url,
            self.domain.as_deref().unwrap_or("null")
        )
    }
}

/// Failure of the concurrent resolution stage.
#[derive(Debug, Error)]
pub enum BatchFailure {
    #[error("{}", failed_urls(.0))]
    Urls(Vec<UrlFailure>),
    /// One or more resolution tasks could not be joined (panicked or
    /// cancelled). URL failures from the other tasks are still reported.
    #[error(
        "An error occurred while fetching redirects: {}{}",
        .errors.join("; "),
        url_suffix(.failures)
    )]
    Join {
        errors: Vec<String>,
        failures: Vec<UrlFailure>,
    },
}

fn failed_urls(failures: &[UrlFailure]) -> String {
    format!(
        "Failed to fetch redirects for {} URL(s): {}",
        failures.len(),
        join_display(failures)
    )
}

fn url_suffix(failures: &[UrlFailure]) -> String {
    if failures.is_empty() {
        String::new()
    } else {
        format!("; {}", failed_urls(failures))
    }
}

/// Top-level error for an invocation; converted into the error result object.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("The list length ({len}) exceeds the maximum allowed length of {max}.")]
    TooManyUrls { len: usize, max: usize },
    #[error("At least one url should be included.")]
    NoUrls,
    #[error(
        "Domain validation failed for {} URL(s): {}. Allowed domains: {}",
        .offenders.len(),
        join_display(.offenders),
        .allowed.join(", ")
    )]
    DomainViolation {
        offenders: Vec<DomainOffender>,
        allowed: Vec<String>,
    },
    #[error(transparent)]
    Batch(#[from] BatchFailure),
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
