use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn from_vars(
        port: Option<String>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let database_url = database_url.ok_or(ConfigError::MissingDatabaseUrl)?;
        Ok(Self { port, database_url })
    }

    /// The server only listens on the loopback interface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_is_loopback_on_configured_port() {
        let config = ServerConfig {
            port: 4321,
            database_url: "sqlite::memory:".to_string(),
        };
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:4321");
    }

    #[test]
    fn port_defaults_when_unset() {
        let config = ServerConfig::from_vars(None, Some("sqlite::memory:".to_string())).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn unparsable_port_is_a_config_error() {
        let err = ServerConfig::from_vars(
            Some("not-a-port".to_string()),
            Some("sqlite::memory:".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "not-a-port"));
    }

    #[test]
    fn missing_database_url_is_a_config_error() {
        let err = ServerConfig::from_vars(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }
}
