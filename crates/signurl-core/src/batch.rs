//! Concurrent resolution of a whole batch.
//!
//! Every URL gets its own blocking task; all of them run to completion and
//! results are re-assembled by index, so completion order never leaks into
//! the output.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::credential::Credential;
use crate::domain::DomainPolicy;
use crate::error::{BatchFailure, UrlFailure};
use crate::fetch_head::Prober;
use crate::input::UrlBatch;
use crate::resolver::resolve_url;

/// Read-only state shared by every resolution task in a batch.
#[derive(Clone)]
pub struct BatchContext {
    pub prober: Arc<dyn Prober>,
    pub policy: Arc<DomainPolicy>,
    pub credential: Arc<Credential>,
}

/// Resolves every URL concurrently.
///
/// Returns the resolved URLs in input order, or every per-URL failure sorted
/// by index. Successful URLs are not returned when any URL failed. A task
/// that cannot be joined does not stop the others from being collected.
pub async fn resolve_batch(
    ctx: &BatchContext,
    batch: &UrlBatch,
) -> Result<Vec<String>, BatchFailure> {
    let mut join_set = tokio::task::JoinSet::new();

    for (index, url) in batch.iter().enumerate() {
        let ctx = ctx.clone();
        let url = url.clone();
        join_set.spawn_blocking(move || {
            let outcome = resolve_url(ctx.prober.as_ref(), &ctx.policy, &ctx.credential, &url);
            (index, url, outcome)
        });
    }

    let mut resolved: Vec<Option<String>> = vec![None; batch.len()];
    let mut failures: Vec<UrlFailure> = Vec::new();
    let mut join_errors: Vec<String> = Vec::new();

    while let Some(res) = join_set.join_next().await {
        let (index, url, outcome) = match res {
            Ok(joined) => joined,
            Err(e) => {
                warn!(error = %e, "resolution task failed to join");
                join_errors.push(e.to_string());
                continue;
            }
        };
        match outcome {
            Ok(signed) => {
                debug!(index, "url resolved");
                resolved[index] = Some(signed);
            }
            Err(error) => {
                warn!(index, url = %url, error = %error, "url resolution failed");
                failures.push(UrlFailure { index, url, error });
            }
        }
    }

    failures.sort_by_key(|f| f.index);
    if !join_errors.is_empty() {
        return Err(BatchFailure::Join {
            errors: join_errors,
            failures,
        });
    }
    if !failures.is_empty() {
        return Err(BatchFailure::Urls(failures));
    }

    Ok(resolved.into_iter().flatten().collect())
}
