//! Application configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to [`AppConfig::default`].
//!
//! ```toml
//! currency_code = "USD"
//! max_tip_percent = 100
//! ```

use std::{fs, path::Path, path::PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tip_core::InputValidator;
use tip_core::validation::{DEFAULT_MAX_TIP_PERCENT, MAX_TIP_PERCENT};

/// Errors raised while reading or checking the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("currency code must be three upper-case letters, got '{0}'")]
    InvalidCurrencyCode(String),

    #[error("max tip percent must be greater than 0 and at most 1000, got {0}")]
    InvalidMaxTipPercent(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// ISO 4217 code used when formatting amounts.
    pub currency_code: String,
    /// Highest tip percentage the form accepts.
    pub max_tip_percent: Decimal,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_code: "USD".to_string(),
            max_tip_percent: DEFAULT_MAX_TIP_PERCENT,
        }
    }
}

impl AppConfig {
    /// Reads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = &self.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidCurrencyCode(code.clone()));
        }
        if self.max_tip_percent <= Decimal::ZERO || self.max_tip_percent > MAX_TIP_PERCENT {
            return Err(ConfigError::InvalidMaxTipPercent(self.max_tip_percent));
        }
        Ok(())
    }

    /// Builds the form validator described by this config.
    pub fn validator(&self) -> InputValidator {
        InputValidator::new(self.max_tip_percent)
    }
}
