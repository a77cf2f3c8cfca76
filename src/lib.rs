//! envfmt - configurable display formatting for character-panel text
//!
//! A host game renders an environment line containing a pretty-printed date
//! and a temperature reading. This crate rewrites those two substrings per
//! user configuration: dropping date segments the user has hidden, and
//! replacing a numeric temperature with a qualitative descriptor chosen from
//! configurable breakpoints. Everything is best-effort: malformed input or
//! configuration degrades to returning the input unchanged, never an error
//! in the host's display.

pub mod config;
pub mod datetime;
pub mod error;
pub mod locale;
pub mod store;
pub mod temperature;

pub use config::{ConfigValue, DisplayConfig, CONFIG_NAME};
pub use datetime::{format_date_with, try_format_date, PrettyDate};
pub use error::{ConfigError, DateError, ScaleError};
pub use locale::Locale;
pub use temperature::{format_temperature_with, TemperatureScale};

/// Reformat a host date string using the process-wide configuration snapshot.
pub fn format_date(input: &str) -> String {
    datetime::format_date_with(input, &store::current(), &Locale::default())
}

/// Reformat a host temperature string using the process-wide configuration
/// snapshot.
pub fn format_temperature(input: &str) -> String {
    temperature::format_temperature_with(input, &store::current())
}
