//! Pricer configuration.
//!
//! Loaded from TOML.  Every field is optional; the defaults reproduce the
//! conventions of the pricing service: TARGET calendar, Actual/365 (Fixed),
//! evaluation date taken from the system clock.
//!
//! ```toml
//! evaluation_date = "2025-01-02"
//! calendar = "TARGET"
//! day_counter = "Actual/365 (Fixed)"
//! ```

use ql_time::{calendar_from_name, day_counter_from_name, Date, EvaluationContext};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not meaningful (unknown calendar, bad date).
    #[error("invalid configuration value: {0}")]
    Value(#[from] ql_core::Error),
}

/// Evaluation conventions shared by every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    /// Evaluation date as `YYYY-MM-DD`; `None` means today.
    pub evaluation_date: Option<String>,
    /// Calendar name: `TARGET`, `WeekendsOnly` or `Null`.
    pub calendar: String,
    /// Day counter name: `Actual/365 (Fixed)` or `Actual/360`.
    pub day_counter: String,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            evaluation_date: None,
            calendar: "TARGET".to_string(),
            day_counter: "Actual/365 (Fixed)".to_string(),
        }
    }
}

impl PricerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build the evaluation context these settings describe.
    pub fn evaluation_context(&self) -> Result<EvaluationContext, ConfigError> {
        let date = match &self.evaluation_date {
            Some(s) => Date::parse_iso(s)?,
            None => Date::todays_date()?,
        };
        Ok(EvaluationContext::new(date)
            .with_calendar(calendar_from_name(&self.calendar)?)
            .with_day_counter(day_counter_from_name(&self.day_counter)?))
    }
}
