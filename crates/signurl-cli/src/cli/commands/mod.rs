//! CLI command handlers.

mod domains;
mod resolve;

pub use domains::run_domains;
pub use resolve::run_resolve;
