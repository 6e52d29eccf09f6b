//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::holidays::HolidayClientConfig;

/// Address the server binds when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// A malformed environment value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub holidays: HolidayClientConfig,
    /// Serve holidays from this JSON file instead of the API
    pub holiday_data_file: Option<PathBuf>,
    /// Kakao REST API key; place search is disabled without it
    pub kakao_api_key: Option<String>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => parse_bind_addr(&value)?,
            None => default_bind_addr(),
        };

        let mut holidays = HolidayClientConfig::default();
        if let Some(url) = get("HOLIDAY_API_BASE_URL") {
            holidays = holidays.with_base_url(url);
        }
        if let Some(code) = get("HOLIDAY_COUNTRY_CODE") {
            holidays = holidays.with_country_code(code.trim().to_uppercase());
        }
        if let Some(value) = get("HOLIDAY_TIMEOUT_SECS") {
            holidays = holidays.with_timeout(parse_timeout(&value)?);
        }

        Ok(Self {
            bind_addr,
            holidays,
            holiday_data_file: get("HOLIDAY_DATA_FILE").map(PathBuf::from),
            kakao_api_key: get("KAKAO_REST_API_KEY"),
        })
    }

    /// Upper bound on one holiday lookup.
    pub fn holiday_timeout(&self) -> Duration {
        Duration::from_secs(self.holidays.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            holidays: HolidayClientConfig::default(),
            holiday_data_file: None,
            kakao_api_key: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
        name: "BIND_ADDR",
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_timeout(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "HOLIDAY_TIMEOUT_SECS",
        value: value.to_string(),
        reason,
    };
    let secs: u64 = value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if secs == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(secs)
}
