use crate::{ConfigError, FromEnv, env_or_default, env_parse_or_default};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated list of allowed CORS origins, or `*` for any origin
    pub cors_allowed_origin: String,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            cors_allowed_origin: "*".to_string(),
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed list of allowed origins. Empty means any origin is accepted.
    pub fn cors_origins(&self) -> Vec<&str> {
        self.cors_allowed_origin
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "*")
            .collect()
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to 0.0.0.0
    /// - PORT: defaults to 8080
    /// - CORS_ALLOWED_ORIGIN: defaults to `*`
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or_default("PORT", "8080")?;
        let cors_allowed_origin = env_or_default("CORS_ALLOWED_ORIGIN", "*");

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}
