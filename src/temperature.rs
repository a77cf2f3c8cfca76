//! Temperature descriptor formatting.

use std::collections::BTreeSet;

use crate::config::DisplayConfig;
use crate::error::ScaleError;

/// An ordered temperature scale derived from the configuration strings.
///
/// Breakpoints are unique and ascending; `N` breakpoints form `N + 1` ranges
/// and the descriptor list always holds exactly one label per range.
/// Rederived from the current configuration on every formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureScale {
    breakpoints: Vec<i32>,
    descriptors: Vec<String>,
}

impl TemperatureScale {
    /// Parse the comma-separated breakpoint and descriptor lists.
    ///
    /// Non-integer breakpoint tokens and empty labels are discarded;
    /// duplicate breakpoints collapse. A short descriptor list is padded by
    /// repeating its last label, an over-long one is cut to fit.
    pub fn parse(breakpoints: &str, descriptors: &str) -> Result<Self, ScaleError> {
        let breakpoints: Vec<i32> = breakpoints
            .split(',')
            .filter_map(|token| token.trim().parse::<i32>().ok())
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();
        if breakpoints.is_empty() {
            return Err(ScaleError::NoBreakpoints);
        }

        let mut descriptors: Vec<String> = descriptors
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();
        if descriptors.is_empty() {
            return Err(ScaleError::NoDescriptors);
        }

        let ranges = breakpoints.len() + 1;
        if descriptors.len() < ranges {
            let last = descriptors[descriptors.len() - 1].clone();
            descriptors.resize(ranges, last);
        }
        descriptors.truncate(ranges);

        Ok(TemperatureScale {
            breakpoints,
            descriptors,
        })
    }

    /// Index of the range containing `temperature`.
    ///
    /// Range 0 lies below the first breakpoint, range `N` at or above the
    /// last. A reading equal to a breakpoint lands in the higher range.
    pub fn range_index(&self, temperature: i32) -> usize {
        self.breakpoints
            .iter()
            .take_while(|&&breakpoint| temperature >= breakpoint)
            .count()
    }

    /// The label for the range containing `temperature`.
    pub fn descriptor_for(&self, temperature: i32) -> &str {
        &self.descriptors[self.range_index(temperature)]
    }

    pub fn breakpoints(&self) -> &[i32] {
        &self.breakpoints
    }

    pub fn descriptors(&self) -> &[String] {
        &self.descriptors
    }
}

/// Parse a host reading like `"15°C"` or `"-4°F"` into whole degrees.
///
/// The unit marker only gets stripped, never converted; breakpoints are
/// expected in the same unit the host displays.
fn parse_reading(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_suffix("°C")
        .or_else(|| trimmed.strip_suffix("°F"))
        .unwrap_or(trimmed)
        .trim_end();
    digits.parse().ok()
}

/// Replace a host temperature reading with its configured descriptor.
///
/// This is an infallible function: with descriptor mode off, an unparseable
/// reading, or an unusable configured scale, the input is returned unchanged
/// rather than surfacing an error into the host's display.
pub fn format_temperature_with(input: &str, config: &DisplayConfig) -> String {
    if !config.use_temperature_descriptors {
        return input.to_string();
    }

    let reading = match parse_reading(input) {
        Some(reading) => reading,
        None => return input.to_string(),
    };

    match TemperatureScale::parse(
        &config.temperature_breakpoints,
        &config.temperature_descriptors,
    ) {
        Ok(scale) => scale.descriptor_for(reading).to_string(),
        Err(_) => input.to_string(),
    }
}
