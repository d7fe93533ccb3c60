//! CLI command implementations
//!
//! `init` seeds the data file and exits; `start` seeds if needed, then
//! boots the HTTP server on a fresh tokio runtime.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};
use crate::store::file::DEFAULT_DATA_FILE;
use crate::store::FileStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the backing data file
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the full default configuration; an unreadable
    /// or malformed file is an error.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            CliError::config_error(format!("invalid config {}: {}", path.display(), e))
        })
    }
}

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Create and seed the data file if it does not exist
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = FileStore::new(&config.data_file);
    store
        .ensure_initialized()
        .map_err(|e| CliError::init_error(e.to_string()))?;

    Logger::log(
        Severity::Info,
        "store_initialized",
        &[("data_file", &config.data_file)],
    );
    Ok(())
}

/// Seed the data file if needed, then serve until interrupted
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = FileStore::new(&config.data_file);
    store
        .ensure_initialized()
        .map_err(|e| CliError::init_error(e.to_string()))?;

    let server = HttpServer::with_config(Arc::new(store), config.http);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("tokio runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}
