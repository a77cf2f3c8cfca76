//! Display configuration.
//!
//! The configuration is a flat record loaded and saved by an external
//! settings store; the JSON field names stay camelCase so existing settings
//! files round-trip unchanged.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name the external settings store uses for this configuration.
pub const CONFIG_NAME: &str = "envfmt.json";

/// User-facing display settings.
///
/// Replaced wholesale on a settings-change notification; formatting calls
/// read an immutable snapshot (see [`crate::store`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub show_year: bool,
    pub show_month: bool,
    pub show_day: bool,
    pub show_time: bool,
    pub use_temperature_descriptors: bool,
    /// Comma-separated integer thresholds, e.g. `"-10, 0, 5, 15, 25, 30"`.
    pub temperature_breakpoints: String,
    /// Comma-separated labels, one per range between breakpoints.
    pub temperature_descriptors: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_year: true,
            show_month: true,
            show_day: true,
            show_time: true,
            use_temperature_descriptors: false,
            temperature_breakpoints: "-10, 0, 5, 15, 25, 30".to_string(),
            temperature_descriptors:
                "Biting cold, Very Cold, Cold, Freezing, Chilly, Comfortable, Warm, Sweltering"
                    .to_string(),
        }
    }
}

impl DisplayConfig {
    /// Apply one changed field by its settings-store name.
    ///
    /// Settings-change notifications carry a single-field delta keyed by the
    /// camelCase name the store serializes.
    pub fn apply(&mut self, setting: &str, value: ConfigValue) -> Result<(), ConfigError> {
        match setting {
            "showYear" => self.show_year = value.expect_bool(setting)?,
            "showMonth" => self.show_month = value.expect_bool(setting)?,
            "showDay" => self.show_day = value.expect_bool(setting)?,
            "showTime" => self.show_time = value.expect_bool(setting)?,
            "useTemperatureDescriptors" => {
                self.use_temperature_descriptors = value.expect_bool(setting)?
            }
            "temperatureBreakpoints" => self.temperature_breakpoints = value.expect_text(setting)?,
            "temperatureDescriptors" => self.temperature_descriptors = value.expect_text(setting)?,
            _ => {
                return Err(ConfigError::UnknownSetting {
                    name: setting.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// A single changed value carried by a settings-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Text(String),
}

impl ConfigValue {
    fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Text(_) => "text",
        }
    }

    fn expect_bool(self, setting: &str) -> Result<bool, ConfigError> {
        match self {
            ConfigValue::Bool(b) => Ok(b),
            other => Err(ConfigError::TypeMismatch {
                setting: setting.to_string(),
                expected: "bool",
                got: other.type_name(),
            }),
        }
    }

    fn expect_text(self, setting: &str) -> Result<String, ConfigError> {
        match self {
            ConfigValue::Text(s) => Ok(s),
            other => Err(ConfigError::TypeMismatch {
                setting: setting.to_string(),
                expected: "text",
                got: other.type_name(),
            }),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}
