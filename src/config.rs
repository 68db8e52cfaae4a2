//! Process configuration.
//!
//! All configuration comes from the environment, is validated once at
//! startup, and travels as an explicit immutable value. The core logic
//! never reads ambient state; a missing required variable fails the
//! process before the listener binds.

use std::env;
use std::net::SocketAddr;

use crate::error::{DashboardError, DashboardResult};

/// Environment variable naming the read-only sales store DSN.
pub const SALES_DB_VAR: &str = "SALES_DATABASE_URL_RO";

/// Environment variable naming the read-only attendance store DSN.
pub const ATTEND_DB_VAR: &str = "ATTEND_DATABASE_URL_RO";

/// Environment variable holding the shared secret for the key header.
pub const INTERNAL_KEY_VAR: &str = "INTERNAL_KEY";

/// Environment variable overriding the listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Validated startup configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for the read-only sales store.
    pub sales_db_url: String,
    /// Connection string for the read-only attendance store.
    pub attend_db_url: String,
    /// Shared secret expected in the internal key header.
    pub internal_key: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads and validates configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingEnvVar`] if any required variable
    /// is absent, or [`DashboardError::InvalidEnvVar`] if the bind
    /// address does not parse.
    pub fn from_env() -> DashboardResult<Self> {
        Ok(Self {
            sales_db_url: require(SALES_DB_VAR)?,
            attend_db_url: require(ATTEND_DB_VAR)?,
            internal_key: require(INTERNAL_KEY_VAR)?,
            bind_addr: bind_addr_from_env()?,
        })
    }
}

fn require(name: &str) -> DashboardResult<String> {
    env::var(name).map_err(|_| DashboardError::MissingEnvVar {
        name: name.to_string(),
    })
}

fn bind_addr_from_env() -> DashboardResult<SocketAddr> {
    let raw = env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse().map_err(|err: std::net::AddrParseError| {
        DashboardError::InvalidEnvVar {
            name: BIND_ADDR_VAR.to_string(),
            message: err.to_string(),
        }
    })
}
