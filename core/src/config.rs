use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_URL: &str = "SPORTSEE_API_URL";
pub const ENV_USE_MOCK: &str = "SPORTSEE_USE_MOCK";
pub const ENV_TIMEOUT_SECS: &str = "SPORTSEE_TIMEOUT_SECS";

/// Konfig som sendes eksplisitt inn i `DataClient` (ingen global mock-bryter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// true => hopp over nettet og server fixtures direkte
    pub use_mock: bool,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            use_mock: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn mock() -> Self {
        Self {
            use_mock: true,
            ..Self::default()
        }
    }

    /// Leser konfig fra disk (JSON).
    /// Hvis filen ikke finnes, returneres default-konfig.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            log::warn!("config file {path} not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut de = serde_json::Deserializer::from_str(&contents);
        let cfg: Self = spte::deserialize(&mut de).map_err(|e| ConfigError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })?;
        // ingenting etter det første JSON-objektet
        de.end().map_err(|e| ConfigError::Parse {
            path: ".".to_string(),
            message: e.to_string(),
        })?;
        cfg.validate()?;

        log::info!(
            "config loaded from {path} (base_url={}, use_mock={})",
            cfg.base_url,
            cfg.use_mock
        );
        Ok(cfg)
    }

    /// Leser `SPORTSEE_*` fra miljøet. Variabler som mangler beholder default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Som `from_env`, men med valgfri oppslagsfunksjon (testbar uten å røre miljøet).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            cfg.base_url = url;
        }
        if let Some(raw) = lookup(ENV_USE_MOCK) {
            cfg.use_mock = parse_bool(ENV_USE_MOCK, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            cfg.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS.to_string(),
                value: raw.clone(),
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Full URL for en sti som starter med `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_trims_trailing_slash() {
        let cfg = ClientConfig {
            base_url: "http://api.local:3000/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(cfg.url_for("/user/12"), "http://api.local:3000/user/12");
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("K", "TRUE").unwrap());
        assert!(parse_bool("K", " 1 ").unwrap());
        assert!(!parse_bool("K", "off").unwrap());
        assert!(parse_bool("K", "maybe").is_err());
    }
}
