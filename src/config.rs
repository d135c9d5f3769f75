//! Runtime settings. Only the binary reads the environment; the library
//! receives a `Settings` value.

use crate::application::lookup::DEFAULT_SPOT_MARKET_CODES;
use crate::infrastructure::feeds::b3::DEFAULT_URL;
use crate::infrastructure::parsers::settlement_table::DEFAULT_TABLE_ID;
use thiserror::Error;

pub const DEFAULT_CACHE_TTL_SECS: i64 = 6000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: String,
    pub table_id: String,
    pub cache_ttl: chrono::Duration,
    pub request_timeout: std::time::Duration,
    pub spot_market_codes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_URL.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            cache_ttl: chrono::Duration::seconds(DEFAULT_CACHE_TTL_SECS),
            request_timeout: std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            spot_market_codes: DEFAULT_SPOT_MARKET_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from `AJUSTES_*` variables resolved through `get`.
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(url) = get("AJUSTES_URL") {
            settings.endpoint_url = url.trim().to_string();
        }
        if let Some(id) = get("AJUSTES_TABLE_ID") {
            settings.table_id = id.trim().to_string();
        }
        if let Some(raw) = get("AJUSTES_CACHE_TTL_SECS") {
            let secs = positive(&raw, "AJUSTES_CACHE_TTL_SECS")?;
            settings.cache_ttl = chrono::Duration::seconds(secs as i64);
        }
        if let Some(raw) = get("AJUSTES_TIMEOUT_SECS") {
            let secs = positive(&raw, "AJUSTES_TIMEOUT_SECS")?;
            settings.request_timeout = std::time::Duration::from_secs(secs);
        }
        if let Some(raw) = get("AJUSTES_SPOT_CODES") {
            settings.spot_market_codes = raw
                .split(',')
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .collect();
        }

        Ok(settings)
    }
}

fn positive(raw: &str, key: &'static str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(u64::from(n)),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}
