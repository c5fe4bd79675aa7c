//! services/table/src/config.rs
//!
//! Defines the service's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use people_table_core::{parse_count, TimerConfig};
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub people_count: usize,
    pub countdown_seconds: u32,
    pub tick_period: Duration,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let people_count = match lookup("PEOPLE_COUNT") {
            Some(raw) => parse_count(&raw).map_err(|e| {
                ConfigError::InvalidValue("PEOPLE_COUNT".to_string(), e.to_string())
            })?,
            None => 10,
        };

        let countdown_seconds = parse_positive::<u32>(&lookup, "COUNTDOWN_SECONDS", 30)?;
        let tick_millis = parse_positive::<u64>(&lookup, "TICK_MILLIS", 1000)?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            people_count,
            countdown_seconds,
            tick_period: Duration::from_millis(tick_millis),
            log_level,
        })
    }

    /// The countdown settings handed to the core timer.
    pub fn timer(&self) -> TimerConfig {
        TimerConfig {
            start_from: self.countdown_seconds,
            period: self.tick_period,
        }
    }
}

fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidValue(
            key.to_string(),
            format!("'{}' is not a positive integer", raw),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.people_count, 10);
        assert_eq!(config.timer(), TimerConfig::default());
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PEOPLE_COUNT", "25"),
            ("COUNTDOWN_SECONDS", "5"),
            ("TICK_MILLIS", "200"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.people_count, 25);
        assert_eq!(config.countdown_seconds, 5);
        assert_eq!(config.tick_period, Duration::from_millis(200));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_negative_people_count() {
        let err = load(&[("PEOPLE_COUNT", "-4")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "PEOPLE_COUNT"));
    }

    #[test]
    fn rejects_non_integer_people_count() {
        assert!(load(&[("PEOPLE_COUNT", "lots")]).is_err());
    }

    #[test]
    fn rejects_zero_tick() {
        let err = load(&[("TICK_MILLIS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "TICK_MILLIS"));
    }

    #[test]
    fn rejects_bad_log_level() {
        assert!(load(&[("RUST_LOG", "chatty")]).is_err());
    }
}
