use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Top-level configuration parsed from TOML.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server-level configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9011
}

impl ServerConfig {
    /// Socket address to bind; fails if `host` is not a literal IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| format!("server.host '{}' is not an IP address: {e}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Load config from a TOML file, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                format!("Failed to read config file '{}': {}", path.display(), e)
            })?;
            parse_config(&content)?
        }
        None => Config::default(),
    };

    validate(&config)?;
    Ok(config)
}

fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str(content).map_err(|e| format!("Failed to parse TOML config: {e}"))
}

/// Validate the configuration. Returns an error string on failure.
pub fn validate(config: &Config) -> Result<(), String> {
    if config.server.host.is_empty() {
        return Err("server.host must not be empty".to_string());
    }
    config.server.bind_addr()?;
    Ok(())
}
