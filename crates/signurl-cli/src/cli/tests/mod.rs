//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_events_use_the_signurl_target() {
    assert_eq!(module_path!().split("::").next(), Some("signurl"));
}
