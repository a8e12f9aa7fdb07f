//! Configuration module

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5556,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = toml::from_str(&raw).map_err(|e| {
            CliError::ConfigError(format!("cannot parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }
}
