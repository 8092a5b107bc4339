//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub moods_path: PathBuf,
    pub log_level: Level,
    /// `None` allows requests from any origin.
    pub cors_allowed_origin: Option<String>,
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
        // --- Load Server Settings ---
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:4000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Storage Settings ---
        let moods_path = lookup("MOODS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./moods.json"));
        if moods_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "MOODS_PATH".to_string(),
                "path must not be empty".to_string(),
            ));
        }

        let cors_allowed_origin =
            lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.is_empty() && o != "*");

        Ok(Self {
            bind_address,
            moods_path,
            log_level,
            cors_allowed_origin,
        })
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
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:4000".parse().unwrap());
        assert_eq!(config.moods_path, PathBuf::from("./moods.json"));
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.cors_allowed_origin, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("MOODS_PATH", "/var/lib/moods/moods.json"),
            ("RUST_LOG", "debug"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:5173"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.moods_path, PathBuf::from("/var/lib/moods/moods.json"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[test]
    fn wildcard_origin_means_any() {
        let config = load(&[("CORS_ALLOWED_ORIGIN", "*")]).unwrap();
        assert_eq!(config.cors_allowed_origin, None);
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = load(&[("BIND_ADDRESS", "not-an-address")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "BIND_ADDRESS"));
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = load(&[("RUST_LOG", "chatty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "RUST_LOG"));
    }

    #[test]
    fn rejects_empty_moods_path() {
        let err = load(&[("MOODS_PATH", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "MOODS_PATH"));
    }
}
