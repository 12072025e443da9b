//! Environment-driven configuration
//!
//! Environment:
//! - `YARD_BIND_ADDR`: socket address to listen on (default `0.0.0.0:3000`)
//! - `YARD_API_KEY`: shared-secret API key (default `local-dev-key`, with a
//!   warning; set a real value in production)
//! - `YARD_MAX_PAGE_SIZE`: ceiling for the pageSize query parameter
//!   (default `100`)

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Development fallback for the API key
pub const DEFAULT_API_KEY: &str = "local-dev-key";

/// Default ceiling for the pageSize query parameter
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

/// Invalid configuration; startup aborts on these
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YARD_BIND_ADDR: {0}")]
    InvalidBindAddr(#[from] std::net::AddrParseError),
    #[error("invalid YARD_MAX_PAGE_SIZE: {0}")]
    InvalidMaxPageSize(#[from] std::num::ParseIntError),
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub api_key: String,
    pub max_page_size: i64,
}

impl Config {
    /// Read configuration from the environment, applying defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match env::var("YARD_BIND_ADDR") {
            Ok(addr) => addr.parse()?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let api_key = match env::var("YARD_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                tracing::warn!("YARD_API_KEY not set, using the development default");
                DEFAULT_API_KEY.to_string()
            }
        };

        let max_page_size = match env::var("YARD_MAX_PAGE_SIZE") {
            Ok(value) => value.parse()?,
            Err(_) => DEFAULT_MAX_PAGE_SIZE,
        };

        Ok(Self {
            bind_addr,
            api_key,
            max_page_size,
        })
    }
}
