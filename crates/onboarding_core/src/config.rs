//! Store configuration with environment overrides.
//!
//! # Invariants
//! - `storage_key` is never blank.
//! - `log_dir`, when set, is absolute.

use crate::logging::default_log_level;
use crate::repo::state_repo::DEFAULT_STORAGE_KEY;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_DB_FILE_NAME: &str = "onboarding.sqlite3";

pub const ENV_DB_PATH: &str = "ONBOARDING_DB_PATH";
pub const ENV_STORAGE_KEY: &str = "ONBOARDING_STORAGE_KEY";
pub const ENV_LOG_LEVEL: &str = "ONBOARDING_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ONBOARDING_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BlankStorageKey,
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankStorageKey => write!(f, "storage key must not be blank"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log dir must be an absolute path, got `{}`", dir.display())
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub log_level: String,
    /// File logging is off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `ONBOARDING_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values returned by `lookup`; blank values are
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = value(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path.trim());
        }
        if let Some(key) = value(ENV_STORAGE_KEY) {
            config.storage_key = key.trim().to_string();
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::BlankStorageKey);
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig, ENV_LOG_DIR, ENV_STORAGE_KEY};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.storage_key, "onboarding_v6_state");
    }

    #[test]
    fn overrides_are_trimmed_and_blank_values_ignored() {
        let config =
            StoreConfig::from_lookup(lookup(&[(ENV_STORAGE_KEY, " custom "), (ENV_LOG_DIR, "  ")]))
                .unwrap();
        assert_eq!(config.storage_key, "custom");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "logs")])).unwrap_err();
        assert!(matches!(err, ConfigError::RelativeLogDir(_)));
    }
}
