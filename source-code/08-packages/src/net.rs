//! Shared settings and errors for the toy TCP servers.

use crate::codec::CodecError;
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const ADDR_ENV: &str = "FUNDAMENTALS_ADDR";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum NetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("peer closed the connection before sending a frame")]
    ConnectionClosed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetConfig {
    pub addr: SocketAddr,
}

impl Default for NetConfig {
    fn default() -> Self {
        NetConfig {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

impl NetConfig {
    /// Reads `FUNDAMENTALS_ADDR`, falling back to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ADDR_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .map(|addr| NetConfig { addr })
                .map_err(|_| ConfigError::InvalidAddr {
                    var: ADDR_ENV,
                    value: raw,
                }),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_localhost_8080() {
        let config = NetConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn override_from_lookup() {
        let config = NetConfig::from_lookup(|key| {
            assert_eq!(key, ADDR_ENV);
            Some("0.0.0.0:9000".to_string())
        })
        .unwrap();
        assert_eq!(config.addr.port(), 9000);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = NetConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value: "localhost".to_string()
            }
        );
    }
}
