//! Server configuration
//!
//! Defaults, then `etudiants.toml` if present, then `ETUDIANTS_*` variables.

use anyhow::{Context, Result};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_PATH: &str = "etudiants.db";
pub const CONFIG_FILE: &str = "etudiants";
pub const ENV_PREFIX: &str = "ETUDIANTS";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_path: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_env(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let environment =
            Environment::with_prefix(ENV_PREFIX).source(Some(vars.into_iter().collect()));
        ServerConfig::build(Config::builder().add_source(environment))
    }

    #[test]
    fn test_defaults() {
        let config = from_env(&[]).unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_environment_overrides() {
        let config = from_env(&[
            ("ETUDIANTS_BIND_ADDRESS", "0.0.0.0:8080"),
            ("ETUDIANTS_DATABASE_PATH", "/tmp/etudiants.db"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.database_path, "/tmp/etudiants.db");
    }

    #[test]
    fn test_bad_bind_address() {
        let config = from_env(&[("ETUDIANTS_BIND_ADDRESS", "nowhere")]).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
