pub mod config;
pub mod logging;

pub mod action;
pub mod batch;
pub mod bounds;
pub mod credential;
pub mod domain;
pub mod error;
pub mod fetch_head;
pub mod input;
pub mod resolver;
pub mod url_model;

#[cfg(test)]
pub(crate) mod testing;
