//! Listening address configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default server port.
pub const DEFAULT_PORT: u16 = 8005;

/// Default bind host.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "VCON_SERVER_HOST";

/// Environment variable overriding the port.
pub const PORT_ENV: &str = "VCON_SERVER_PORT";

/// Address the server listens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind host.
    #[must_use]
    pub const fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Set the bind port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Read the config from `VCON_SERVER_HOST` and `VCON_SERVER_PORT`.
    ///
    /// Missing or unparsable values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(HOST_ENV).ok().as_deref(),
            std::env::var(PORT_ENV).ok().as_deref(),
        )
    }

    fn from_vars(host: Option<&str>, port: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = host {
            match raw.trim().parse() {
                Ok(h) => config.host = h,
                Err(_) => tracing::warn!("Ignoring invalid {HOST_ENV}={raw:?}, using {DEFAULT_HOST}"),
            }
        }

        if let Some(raw) = port {
            match raw.trim().parse() {
                Ok(p) => config.port = p,
                Err(_) => tracing::warn!("Ignoring invalid {PORT_ENV}={raw:?}, using {DEFAULT_PORT}"),
            }
        }

        config
    }

    /// Socket address to bind.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        assert_eq!(ServerConfig::new().addr().to_string(), "0.0.0.0:8005");
    }

    #[test]
    fn test_builder() {
        let config = ServerConfig::new()
            .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .with_port(9000);
        assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 "));
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_from_vars_invalid_falls_back() {
        let config = ServerConfig::from_vars(Some("not-an-ip"), Some("99999"));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_from_vars_missing() {
        assert_eq!(ServerConfig::from_vars(None, None), ServerConfig::default());
    }
}
