//! CLI module for storefront
//!
//! Provides command-line interface for:
//! - init: Create and seed the data file
//! - start: Boot the HTTP server and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
