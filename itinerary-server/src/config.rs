//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Default bind address: all interfaces, port 8080.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Default upper bound on segments accepted in one request.
pub const DEFAULT_MAX_SEGMENTS: usize = 1000;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "itinerary_server=info,tower_http=info";

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Maximum number of segments in a single request.
    /// Larger requests are rejected before validation.
    pub max_segments: usize,

    /// `tracing-subscriber` filter directives.
    pub log_filter: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `ITINERARY_ADDR`, `ITINERARY_MAX_SEGMENTS` and `RUST_LOG`,
    /// falling back to defaults for any that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("ITINERARY_ADDR") {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: "ITINERARY_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("ITINERARY_MAX_SEGMENTS") {
            config.max_segments = match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: "ITINERARY_MAX_SEGMENTS",
                        value,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: "ITINERARY_MAX_SEGMENTS",
                        value,
                        reason: e.to_string(),
                    });
                }
            };
        }

        if let Some(value) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            config.log_filter = value;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            max_segments: DEFAULT_MAX_SEGMENTS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.max_segments, 1000);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.max_segments, DEFAULT_MAX_SEGMENTS);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ITINERARY_ADDR", "127.0.0.1:9000"),
            ("ITINERARY_MAX_SEGMENTS", "25"),
            ("RUST_LOG", "itinerary_server=debug"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.max_segments, 25);
        assert_eq!(config.log_filter, "itinerary_server=debug");
    }

    #[test]
    fn blank_log_filter_keeps_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn rejects_bad_addr() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ITINERARY_ADDR", "localhost")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "ITINERARY_ADDR", .. }
        ));
    }

    #[test]
    fn rejects_bad_max_segments() {
        for bad in ["zero", "-1", "0"] {
            let err =
                ServerConfig::from_lookup(lookup_from(&[("ITINERARY_MAX_SEGMENTS", bad)]))
                    .unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { key: "ITINERARY_MAX_SEGMENTS", .. }
            ));
        }
    }
}
