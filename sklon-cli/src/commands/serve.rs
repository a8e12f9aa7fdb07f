//! Serve command implementation

use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::server;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to bind; overrides the configuration file
    #[arg(value_name = "PORT", env = "SKLON_PORT")]
    pub port: Option<u16>,

    /// Address to bind; overrides the configuration file
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Execute the serve command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let host = self.host.clone().unwrap_or(config.server.host);
        let port = self.port.unwrap_or(config.server.port);

        log::debug!("starting server on {host}:{port}");
        server::run(&host, port)
    }
}
