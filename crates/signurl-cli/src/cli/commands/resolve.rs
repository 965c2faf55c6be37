//! `signurl resolve [URL]...` – run the action and print its result.

use anyhow::{Context, Result};
use signurl_core::action::{run_action, Secrets};
use signurl_core::config::SignurlConfig;
use signurl_core::fetch_head::CurlProber;
use signurl_core::input::ActionRequest;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use crate::cli::{Outcome, ResolveArgs};

/// Lines of `path` (or stdin for "-"), unmodified. Trimming and dropping
/// blanks is the input collector's job.
pub(crate) fn read_url_lines(path: &Path) -> Result<Vec<String>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading URLs from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading URLs from {}", path.display()))?
    };
    Ok(text.lines().map(str::to_string).collect())
}

/// Maps the command-line arguments onto the action's properties.
pub(crate) fn build_request(args: &ResolveArgs) -> Result<ActionRequest> {
    if args.list || args.file.is_some() {
        let mut urls = args.urls.clone();
        if let Some(path) = &args.file {
            urls.extend(read_url_lines(path)?);
        }
        Ok(ActionRequest::list(urls))
    } else {
        Ok(ActionRequest {
            list_mode: false,
            single_url: args.urls.first().cloned(),
            url_list: None,
        })
    }
}

pub(crate) fn secrets_for(cfg: &SignurlConfig, whitelist: Option<&str>) -> Secrets {
    Secrets {
        api_key: cfg.credential(),
        whitelisted_domains: whitelist
            .map(str::to_string)
            .or_else(|| cfg.whitelisted_domains.clone()),
    }
}

pub async fn run_resolve(cfg: &SignurlConfig, args: ResolveArgs) -> Result<Outcome> {
    let request = build_request(&args)?;
    let secrets = secrets_for(cfg, args.whitelist.as_deref());
    let prober = Arc::new(CurlProber::new(&cfg.probe));

    let result = run_action(&request, &secrets, prober).await;
    println!("{}", result.to_json_pretty().context("serializing result")?);

    Ok(if result.is_error() {
        Outcome::ReturnedError
    } else {
        Outcome::Success
    })
}
