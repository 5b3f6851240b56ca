//! Application settings loaded via OrthoConfig.
//!
//! Sources, lowest precedence first: defaults, config file, `ROSTER_*`
//! environment variables, command-line flags.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddress { value: String, message: String },
}

/// Runtime settings for the roster server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_address: Option<String>,
    /// PostgreSQL URL. Without it the server runs on fixture ports.
    pub database_url: Option<String>,
    /// File holding the session cookie signing key.
    pub session_key_file: Option<PathBuf>,
    /// Allow a throwaway session key when the key file is unreadable.
    pub session_allow_ephemeral: Option<bool>,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: Option<bool>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Parsed listen address, falling back to the default.
    pub fn bind_address(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        raw.parse().map_err(|error: std::net::AddrParseError| {
            SettingsError::BindAddress {
                value: raw.to_owned(),
                message: error.to_string(),
            }
        })
    }

    /// Session key path, falling back to the default secret mount.
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Whether an ephemeral session key is acceptable. Off unless set.
    pub fn session_allow_ephemeral(&self) -> bool {
        self.session_allow_ephemeral.unwrap_or(false)
    }

    /// Whether session cookies carry `Secure`. On unless set.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}
