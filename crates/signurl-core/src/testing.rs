//! Scripted [`Prober`] for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::fetch_head::{ProbeError, ProbeResponse, Prober};

type Script = dyn Fn(&str, Option<&str>) -> Result<ProbeResponse, ProbeError> + Send + Sync;

/// One recorded HEAD attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProbeCall {
    pub url: String,
    pub authorization: Option<String>,
}

/// Answers probes from a closure of `(url, authorization)` and records every call.
pub(crate) struct ScriptedProber {
    script: Box<Script>,
    calls: Mutex<Vec<ProbeCall>>,
}

impl ScriptedProber {
    pub(crate) fn new(
        script: impl Fn(&str, Option<&str>) -> Result<ProbeResponse, ProbeError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every probe returns `200` without a `Location`.
    pub(crate) fn always_ok() -> Self {
        Self::new(|_, _| Ok(ok()))
    }

    pub(crate) fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_for(&self, url: &str) -> Vec<ProbeCall> {
        self.calls().into_iter().filter(|c| c.url == url).collect()
    }
}

impl Prober for ScriptedProber {
    fn head(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<ProbeResponse, ProbeError> {
        let authorization = headers.get("Authorization").cloned();
        self.calls.lock().unwrap().push(ProbeCall {
            url: url.to_string(),
            authorization: authorization.clone(),
        });
        (self.script)(url, authorization.as_deref())
    }
}

pub(crate) fn ok() -> ProbeResponse {
    ProbeResponse {
        status: 200,
        location: None,
    }
}

pub(crate) fn redirect(location: &str) -> ProbeResponse {
    ProbeResponse {
        status: 302,
        location: Some(location.to_string()),
    }
}
