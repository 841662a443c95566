use super::{ConfigError, HolonetConfig};

/// A strongly-typed group of settings sharing a key prefix.
pub trait ConfigSection: Sized {
    /// The key prefix, e.g. `"database"`.
    fn prefix() -> &'static str;

    fn from_config(config: &HolonetConfig) -> Result<Self, ConfigError>;
}

/// Listen address of the HTTP server.
///
/// `server.port` wins over a bare `port` key, so both `SERVER_PORT` and the
/// conventional `PORT` variable work.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigSection for ServerConfig {
    fn prefix() -> &'static str {
        "server"
    }

    fn from_config(config: &HolonetConfig) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();
        let host = config.get_or("server.host", defaults.host)?;
        let port = match config.get::<u16>("server.port") {
            Err(ConfigError::NotFound(_)) => config.get_or("port", defaults.port)?,
            other => other?,
        };
        Ok(ServerConfig { host, port })
    }
}
