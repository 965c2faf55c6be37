//! CLI host for the signurl action.
//!
//! Plays the plugin runtime's part: gathers the properties from arguments,
//! files or stdin, injects the secrets from environment/config, and prints
//! the result object as JSON on stdout.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use signurl_core::config;
use std::path::PathBuf;

use commands::{run_domains, run_resolve};

/// Top-level CLI for signurl.
#[derive(Debug, Parser)]
#[command(name = "signurl")]
#[command(about = "Resolve file URLs to their signed redirect targets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one URL, or a list of up to 50 with --list.
    Resolve(ResolveArgs),

    /// Show the trusted and auth-required domain sets.
    Domains {
        /// Comma-separated custom domains (overrides `whitelisted_domains` in config).
        #[arg(long, value_name = "DOMAINS")]
        whitelist: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// URLs to resolve. Without --list only the first one is used.
    pub urls: Vec<String>,

    /// List mode: resolve every URL given (positional and --file).
    #[arg(long)]
    pub list: bool,

    /// Read additional URLs from a file, one per line ("-" for stdin). Implies --list.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Comma-separated custom domains (overrides `whitelisted_domains` in config).
    #[arg(long, value_name = "DOMAINS")]
    pub whitelist: Option<String>,
}

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The action ran but its result object carries `returned_error`.
    ReturnedError,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!(
            whitelisted_domains = ?cfg.whitelisted_domains,
            probe = ?cfg.probe,
            "loaded config"
        );

        match cli.command {
            CliCommand::Resolve(args) => run_resolve(&cfg, args).await,
            CliCommand::Domains { whitelist } => {
                run_domains(&cfg, whitelist.as_deref());
                Ok(Outcome::Success)
            }
        }
    }
}

#[cfg(test)]
mod tests;
