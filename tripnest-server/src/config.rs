//! Configuration loaded from environment variables
//!
//! Store connection:
//! - `DB_USER`, `DB_PASSWORD`: required credentials
//! - `DB_HOST` (default: localhost), `DB_PORT` (default: 5432)
//! - `DB_NAME` (default: trip_nest)
//!
//! HTTP listener defaults (CLI flags and `PORT`/`BIND_ADDR` override):
//! 0.0.0.0:5000

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use sqlx::postgres::PgConnectOptions;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "trip_nest";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("database credentials are not set in the environment variables ({var} missing)")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Document store connection settings
#[derive(Clone)]
pub struct StoreConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl StoreConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "DB_PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            user,
            password,
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port,
            database: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        })
    }

    /// sqlx connect options; credentials are passed as-is, never URL-encoded
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}
