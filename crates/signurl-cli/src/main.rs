use signurl_core::logging;

mod cli;

use crate::cli::{CliCommand, Outcome};

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; stdout is reserved for the result.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args().await {
        Ok(Outcome::Success) => {}
        Ok(Outcome::ReturnedError) => std::process::exit(2),
        Err(err) => {
            eprintln!("signurl error: {:#}", err);
            std::process::exit(1);
        }
    }
}
