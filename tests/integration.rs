//! End-to-end tests driving the process-wide configuration snapshot the way
//! a host display hook would.

use envfmt::{format_date, format_temperature, store, ConfigValue, DisplayConfig, Locale};

const HOST_DATE: &str = "4. June, Year 0, 06:43";
const HOST_TEMP: &str = "15°C";

// Global-snapshot mutation lives in a single test so parallel test threads
// never race on the shared configuration.
#[test]
fn test_display_hook_lifecycle() {
    // Defaults: everything shown, descriptors off
    store::replace(DisplayConfig::default());
    assert_eq!(format_date(HOST_DATE), "4. June, Year 0, 06:43");
    assert_eq!(format_temperature(HOST_TEMP), "15°C");

    // Settings store reloads with a trimmed-down display
    store::replace(DisplayConfig {
        show_year: false,
        show_month: false,
        use_temperature_descriptors: true,
        ..DisplayConfig::default()
    });
    assert_eq!(format_date(HOST_DATE), "4. 06:43");
    assert_eq!(format_temperature(HOST_TEMP), "Chilly");

    // Single-field deltas from the settings-change notification
    store::apply_change("showDay", ConfigValue::Bool(false)).unwrap();
    assert_eq!(format_date(HOST_DATE), "06:43");

    store::apply_change("temperatureBreakpoints", ConfigValue::from("10, 20")).unwrap();
    store::apply_change("temperatureDescriptors", ConfigValue::from("Low, Mid, High")).unwrap();
    assert_eq!(format_temperature(HOST_TEMP), "Mid");

    // A bad delta is rejected and leaves the snapshot untouched
    store::apply_change("showDay", ConfigValue::from("oops")).unwrap_err();
    assert_eq!(format_date(HOST_DATE), "06:43");
    assert_eq!(format_temperature(HOST_TEMP), "Mid");

    // All date flags off: the localized placeholder replaces the date
    store::apply_change("showTime", ConfigValue::Bool(false)).unwrap();
    store::apply_change("showYear", ConfigValue::Bool(false)).unwrap();
    store::apply_change("showMonth", ConfigValue::Bool(false)).unwrap();
    assert_eq!(format_date(HOST_DATE), Locale::default().no_date_display);

    // Malformed host text still passes through untouched
    assert_eq!(format_date("not a date string"), "not a date string");
    assert_eq!(format_temperature("abc°C"), "abc°C");

    store::replace(DisplayConfig::default());
}

#[test]
fn test_locale_lookup() {
    let locale = Locale::default();
    assert_eq!(
        locale.get("envfmt:no-date-display"),
        Some(locale.no_date_display)
    );
    assert_eq!(
        locale.get("no-date-display"),
        Some(locale.no_date_display)
    );
    assert_eq!(locale.get("envfmt:unknown-key"), None);
}
