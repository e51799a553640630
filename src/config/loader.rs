//! Build [`AppConfig`] from environment variables (after an optional `.env`).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();
        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), defaults.max_connections)?,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            stats_interval_minutes: parse_or(
                "STATS_INTERVAL_MINUTES",
                get("STATS_INTERVAL_MINUTES"),
                defaults.stats_interval_minutes,
            )?,
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), defaults.body_limit_bytes)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.stats_period(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATS_INTERVAL_MINUTES", "0"),
            ("BODY_LIMIT_BYTES", " 1024 "),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.max_connections, 2);
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.stats_period(), None);
        assert_eq!(cfg.body_limit_bytes, 1024);
    }

    #[test]
    fn malformed_number_names_the_key() {
        let err = AppConfig::from_lookup(lookup(&[("STATS_INTERVAL_MINUTES", "often")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, value } => {
                assert_eq!(key, "STATS_INTERVAL_MINUTES");
                assert_eq!(value, "often");
            }
        }
    }
}
