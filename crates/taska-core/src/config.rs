//! Configuration types and loading

use serde::{Deserialize, Serialize};

/// Base URL the client talks to when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Public URL of the production deployment
pub const DEFAULT_PRODUCTION_URL: &str = "https://taskjira-production.up.railway.app";

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// URLs advertised by the API document and used by clients
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Production base URL
    pub production_url: String,
    /// Base URL used by the client (`TASKA_API_URL`)
    pub client_base_url: String,
    /// Timeout for client requests
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            api: ApiConfig {
                production_url: DEFAULT_PRODUCTION_URL.to_string(),
                client_base_url: DEFAULT_API_URL.to_string(),
                request_timeout_seconds: 30,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".into(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_SECONDS") {
            config.api.request_timeout_seconds =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "REQUEST_TIMEOUT_SECONDS".into(),
                    message: format!("'{}' is not a number", timeout),
                })?;
        }

        if let Some(url) = lookup("TASKA_PRODUCTION_URL") {
            config.api.production_url = url;
        }
        if let Some(url) = lookup("TASKA_API_URL") {
            config.api.client_base_url = url;
        }

        tracing::debug!(
            host = %config.server.host,
            port = config.server.port,
            "Configuration loaded"
        );

        Ok(config)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api.request_timeout_seconds)
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}
