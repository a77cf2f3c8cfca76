//! Built-in locale strings.

/// Localized strings used by the formatters.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Shown in place of the date when every date display flag is off.
    pub no_date_display: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            no_date_display: "No date information selected",
        }
    }

    /// Look up a string by its namespaced key, e.g. `"envfmt:no-date-display"`.
    ///
    /// The `envfmt:` prefix is optional; unknown keys return `None`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let key = key.strip_prefix("envfmt:").unwrap_or(key);
        match key {
            "no-date-display" => Some(self.no_date_display),
            _ => None,
        }
    }
}
