//! CLI argument definitions using clap
//!
//! Commands:
//! - storefront init --config <path>
//! - storefront start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// storefront - a minimal flat-file backend for an online shop
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create and seed the data file without starting the server
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./storefront.json")]
        config: PathBuf,
    },

    /// Start the storefront API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./storefront.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_defaults_config_path() {
        let cli = Cli::parse_from(["storefront", "start"]);
        match cli.command {
            Command::Start { config } => {
                assert_eq!(config, PathBuf::from("./storefront.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn init_accepts_custom_config_path() {
        let cli = Cli::parse_from(["storefront", "init", "--config", "/tmp/s.json"]);
        match cli.command {
            Command::Init { config } => {
                assert_eq!(config, PathBuf::from("/tmp/s.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
