//! Process-wide configuration snapshot.
//!
//! Formatting calls read an immutable snapshot behind an `Arc`; change
//! notifications swap the snapshot wholesale, so a call in flight keeps the
//! configuration it started with and never observes a partial update.

use std::sync::{Arc, Mutex};

use crate::config::{ConfigValue, DisplayConfig};
use crate::error::ConfigError;

/// Current configuration snapshot, lazily initialized to defaults.
static CURRENT: Mutex<Option<Arc<DisplayConfig>>> = Mutex::new(None);

/// Get the current configuration snapshot.
pub fn current() -> Arc<DisplayConfig> {
    let mut guard = CURRENT.lock().unwrap();
    guard
        .get_or_insert_with(|| Arc::new(DisplayConfig::default()))
        .clone()
}

/// Replace the snapshot wholesale, e.g. after the settings store reloads.
pub fn replace(config: DisplayConfig) {
    *CURRENT.lock().unwrap() = Some(Arc::new(config));
}

/// Apply a single-setting delta from a settings-change notification.
///
/// A failed delta leaves the current snapshot untouched.
pub fn apply_change(setting: &str, value: ConfigValue) -> Result<(), ConfigError> {
    let mut guard = CURRENT.lock().unwrap();
    let mut next = match guard.as_deref() {
        Some(config) => config.clone(),
        None => DisplayConfig::default(),
    };
    next.apply(setting, value)?;
    *guard = Some(Arc::new(next));
    Ok(())
}
