//! Command-line interface module.

mod args;
pub mod report;
pub mod resolve;
pub mod routes;

pub use args::{Cli, Commands};
