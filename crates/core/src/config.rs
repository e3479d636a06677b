//! Navigation configuration

use crate::guard::NavigationGuard;
use crate::table::RouteTable;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Settings for the router and its guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Where unauthenticated navigations are sent
    pub login_path: String,
    /// Local storage key holding the session token
    pub token_storage_key: String,
    /// Upper bound on chained redirects for a single navigation
    pub max_redirects: usize,
    pub log_level: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_path: "/auth".to_string(),
            token_storage_key: "token".to_string(),
            max_redirects: 10,
            log_level: "info".to_string(),
        }
    }
}

impl NavigationConfig {
    /// Load from a TOML document, falling back to defaults for missing keys
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate(&RouteTable::quiz_routes())?;
        Ok(config)
    }

    /// Check the settings against the route table they will drive
    pub fn validate(&self, table: &RouteTable) -> Result<(), ConfigError> {
        validators::validate_not_empty(&self.token_storage_key, "token_storage_key")?;
        validators::validate_range(self.max_redirects, 1, 50, "max_redirects")?;
        validators::validate_log_level(&self.log_level, "log_level")?;
        validators::validate_absolute_path(&self.login_path, "login_path")?;

        if !table.resolve(&self.login_path).is_public() {
            return Err(ConfigError::Message(format!(
                "login_path: '{}' must resolve to a public route",
                self.login_path
            )));
        }
        Ok(())
    }

    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::new(&self.login_path, &self.token_storage_key)
    }
}

mod validators {
    use config::ConfigError;

    const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }

    pub fn validate_log_level(value: &str, field: &str) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Message(format!(
                "{field}: expected one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn validate_absolute_path(value: &str, field: &str) -> Result<(), ConfigError> {
        if !value.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "{field}: must start with '/'"
            )));
        }
        Ok(())
    }
}
