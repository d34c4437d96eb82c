//! Database connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const HOST_VAR: &str = "OCTOFIT_DB_HOST";
pub const PORT_VAR: &str = "OCTOFIT_DB_PORT";
pub const NAME_VAR: &str = "OCTOFIT_DB_NAME";
pub const TIMEOUT_VAR: &str = "OCTOFIT_DB_TIMEOUT_MS";

/// Where to find the MongoDB instance and which database to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    /// Database name within the server.
    pub name: String,
    /// How long to wait for a reachable server before giving up.
    pub timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            name: "octofit_db".to_string(),
            timeout_ms: 5000,
        }
    }
}

impl DatabaseConfig {
    pub fn new(host: impl Into<String>, port: u16, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Reads the settings from `OCTOFIT_DB_*` environment variables,
    /// falling back to the defaults for any that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DatabaseConfig::from_env`] but with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(ConfigError::Missing(HOST_VAR));
        }

        let port = match lookup(PORT_VAR) {
            Some(raw) => parse_port(&raw)?,
            None => defaults.port,
        };

        let name = lookup(NAME_VAR).unwrap_or(defaults.name);
        if name.trim().is_empty() {
            return Err(ConfigError::Missing(NAME_VAR));
        }

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.timeout_ms,
        };

        Ok(Self {
            host: host.trim().to_string(),
            port,
            name: name.trim().to_string(),
            timeout_ms,
        })
    }

    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(ConfigError::InvalidNumber {
            var: PORT_VAR,
            value: raw.to_string(),
            reason: "port must be non-zero",
        }),
        Ok(port) => Ok(port),
        Err(_) => Err(ConfigError::InvalidNumber {
            var: PORT_VAR,
            value: raw.to_string(),
            reason: "expected an integer between 1 and 65535",
        }),
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            var: TIMEOUT_VAR,
            value: raw.to_string(),
            reason: "expected a positive number of milliseconds",
        })
}
