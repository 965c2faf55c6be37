//! The action entry point: properties and secrets in, result object out.
//!
//! Collect → bound check → domain check → concurrent resolution. Every error
//! is folded into [`ActionResult::Error`]; callers always get a well-formed
//! result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::batch::{resolve_batch, BatchContext};
use crate::bounds::check_batch_len;
use crate::credential::Credential;
use crate::domain::DomainPolicy;
use crate::error::ActionError;
use crate::fetch_head::Prober;
use crate::input::{collect_urls, ActionRequest};

/// Host-injected secrets.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub api_key: Credential,
    /// Comma-separated custom domains.
    pub whitelisted_domains: Option<String>,
}

/// Result object handed back to the host.
///
/// Serializes as `{"signed_urls": [...]}` or
/// `{"returned_error": true, "error_message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    Success {
        signed_urls: Vec<String>,
    },
    Error {
        returned_error: bool,
        error_message: String,
    },
}

impl ActionResult {
    pub fn error(message: impl Into<String>) -> Self {
        ActionResult::Error {
            returned_error: true,
            error_message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ActionResult::Error { .. })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<ActionError> for ActionResult {
    fn from(e: ActionError) -> Self {
        ActionResult::error(e.to_string())
    }
}

/// Runs one invocation end to end.
pub async fn run_action(
    request: &ActionRequest,
    secrets: &Secrets,
    prober: Arc<dyn Prober>,
) -> ActionResult {
    match try_run(request, secrets, prober).await {
        Ok(signed_urls) => {
            info!(count = signed_urls.len(), "batch resolved");
            ActionResult::Success { signed_urls }
        }
        Err(e) => {
            warn!(error = %e, "action failed");
            e.into()
        }
    }
}

async fn try_run(
    request: &ActionRequest,
    secrets: &Secrets,
    prober: Arc<dyn Prober>,
) -> Result<Vec<String>, ActionError> {
    let batch = collect_urls(request);
    check_batch_len(batch.len())?;

    let policy = DomainPolicy::from_whitelist(secrets.whitelisted_domains.as_deref().unwrap_or(""));
    policy.validate_batch(&batch)?;

    let ctx = BatchContext {
        prober,
        policy: Arc::new(policy),
        credential: Arc::new(secrets.api_key.clone()),
    };
    Ok(resolve_batch(&ctx, &batch).await?)
}
