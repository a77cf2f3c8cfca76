//! Date/time display formatting.

use crate::config::DisplayConfig;
use crate::error::DateError;
use crate::locale::Locale;

/// Components of a host-rendered date string, e.g. `"4. June, Year 0, 06:43"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyDate<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub time: &'a str,
}

impl<'a> PrettyDate<'a> {
    /// Parse a host date string of the shape `"<day>. <month>, <year>, <time>"`.
    ///
    /// Segments beyond the third are ignored; the host format carries none.
    pub fn parse(input: &'a str) -> Result<Self, DateError> {
        if input.is_empty() {
            return Err(DateError::Empty);
        }

        let segments: Vec<&str> = input.split(',').collect();
        if segments.len() < 3 {
            return Err(DateError::MissingSegments {
                found: segments.len(),
            });
        }

        let (day, month) = segments[0]
            .trim()
            .split_once('.')
            .ok_or(DateError::MalformedDayMonth)?;

        Ok(PrettyDate {
            day: day.trim(),
            month: month.trim(),
            year: segments[1].trim(),
            time: segments[2].trim(),
        })
    }

    /// Rebuild the display string keeping only the segments enabled in `config`.
    ///
    /// With every flag off, returns the localized `no-date-display` string.
    pub fn render(&self, config: &DisplayConfig, locale: &Locale) -> String {
        let show_nothing =
            !config.show_year && !config.show_month && !config.show_day && !config.show_time;
        if show_nothing {
            return locale.no_date_display.to_string();
        }

        let mut out = String::new();
        if config.show_day {
            out.push_str(self.day);
            out.push_str(". ");
        }
        if config.show_month {
            out.push_str(self.month);
            out.push_str(", ");
        }
        if config.show_year {
            out.push_str(self.year);
            out.push_str(", ");
        }
        if config.show_time {
            out.push_str(self.time);
        }

        // A trailing separator is left behind when the last enabled segment
        // is not the time.
        out.trim_end_matches([' ', '.', ',']).to_string()
    }
}

/// Try to reformat a host-rendered date string per the display flags.
///
/// Returns an error when the input does not match the expected shape; use
/// [`format_date_with`] for the identity-fallback behavior a display hook
/// wants.
pub fn try_format_date(
    input: &str,
    config: &DisplayConfig,
    locale: &Locale,
) -> Result<String, DateError> {
    Ok(PrettyDate::parse(input)?.render(config, locale))
}

/// Reformat a host-rendered date string per the display flags.
///
/// This is an infallible function: malformed or empty input is returned
/// unchanged rather than surfacing an error into the host's display.
pub fn format_date_with(input: &str, config: &DisplayConfig, locale: &Locale) -> String {
    match try_format_date(input, config, locale) {
        Ok(result) => result,
        Err(_) => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_shape() {
        let date = PrettyDate::parse("4. June, Year 0, 06:43").unwrap();
        assert_eq!(date.day, "4");
        assert_eq!(date.month, "June");
        assert_eq!(date.year, "Year 0");
        assert_eq!(date.time, "06:43");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PrettyDate::parse(""), Err(DateError::Empty));
    }

    #[test]
    fn test_parse_too_few_segments() {
        assert_eq!(
            PrettyDate::parse("not a date string"),
            Err(DateError::MissingSegments { found: 1 })
        );
    }

    #[test]
    fn test_parse_missing_day_month_dot() {
        assert_eq!(
            PrettyDate::parse("June, Year 0, 06:43"),
            Err(DateError::MalformedDayMonth)
        );
    }
}
