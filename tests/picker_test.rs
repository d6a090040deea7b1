use std::sync::{Arc, Mutex};

use webe_date::date::Zone;
use webe_date::picker::{DatePicker, PickerError, PickerSettings};

// 2024-03-05T00:00:00Z
const MARCH_5: i64 = 1_709_596_800;
// 2024-12-25T18:30:00Z
const CHRISTMAS: i64 = 1_735_151_400;

fn utc_picker(initial: Option<i64>) -> DatePicker {
    let settings = PickerSettings {
        initial_timestamp: initial,
        ..PickerSettings::default()
    };
    DatePicker::new(settings, Zone::Utc)
}

#[test]
fn test_empty_picker_shows_empty_text() {
    let picker = utc_picker(None);
    assert_eq!(picker.text(), "No date set");
    assert_eq!(picker.timestamp(), None);
    assert_eq!(picker.formatted(Some("Y-m-d")), "No date set");
}

#[test]
fn test_non_positive_initial_timestamp_is_empty() {
    assert_eq!(utc_picker(Some(0)).timestamp(), None);
    assert_eq!(utc_picker(Some(-5)).text(), "No date set");
}

#[test]
fn test_initial_timestamp_is_rendered() {
    let picker = utc_picker(Some(MARCH_5));
    assert_eq!(picker.text(), "March 5, 2024");
    assert_eq!(picker.timestamp(), Some(MARCH_5));
    assert_eq!(picker.timestamp_millis(), Some(MARCH_5 * 1000));
    assert_eq!(picker.initial_text(), "March 5, 2024");
}

#[test]
fn test_formatted_with_other_pattern() {
    let picker = utc_picker(Some(CHRISTMAS));
    assert_eq!(picker.formatted(None), "December 25, 2024");
    assert_eq!(picker.formatted(Some("D g:i a")), "Wed 6:30 pm");
}

#[test]
fn test_set_timestamp_and_clear() {
    let mut picker = utc_picker(None);
    picker.set_timestamp(Some(CHRISTMAS));
    assert_eq!(picker.text(), "December 25, 2024");

    picker.set_timestamp(Some(0));
    assert_eq!(picker.timestamp(), None);
    assert_eq!(picker.text(), "No date set");

    picker.set_timestamp(Some(MARCH_5));
    picker.clear();
    assert_eq!(picker.timestamp(), None);
}

#[test]
fn test_set_input_floors_milliseconds() {
    let mut picker = utc_picker(None);
    picker.set_input("1709596800999.7").unwrap();
    assert_eq!(picker.timestamp_millis(), Some(1_709_596_800_999));
    assert_eq!(picker.timestamp(), Some(MARCH_5));

    picker.set_input("  ").unwrap();
    assert_eq!(picker.timestamp(), None);
}

#[test]
fn test_set_input_rejects_garbage() {
    let mut picker = utc_picker(Some(MARCH_5));
    assert_eq!(
        picker.set_input("tomorrow"),
        Err(PickerError::InvalidInput("tomorrow".to_string()))
    );
    assert!(picker.set_input("NaN").is_err());
    assert_eq!(picker.timestamp(), Some(MARCH_5));
}

#[test]
fn test_disabled_picker_rejects_input() {
    let mut picker = utc_picker(None);
    picker.disable();
    assert!(picker.is_disabled());
    assert_eq!(picker.set_input("1709596800000"), Err(PickerError::Disabled));
    assert_eq!(picker.timestamp(), None);

    picker.enable();
    assert!(!picker.is_disabled());
    assert!(picker.set_input("1709596800000").is_ok());
    assert_eq!(picker.timestamp(), Some(MARCH_5));
}

#[test]
fn test_reset_restores_initial_value() {
    let mut picker = utc_picker(Some(MARCH_5));
    picker.set_timestamp(Some(CHRISTMAS));
    picker.reset();
    assert_eq!(picker.timestamp(), Some(MARCH_5));
    assert_eq!(picker.text(), "March 5, 2024");
}

#[test]
fn test_set_initial_explicit_and_snapshot() {
    let mut picker = utc_picker(None);

    picker.set_initial(Some((CHRISTMAS, None)));
    assert_eq!(picker.initial_text(), "December 25, 2024");

    picker.set_initial(Some((MARCH_5, Some("Launch day".to_string()))));
    assert_eq!(picker.initial_text(), "Launch day");
    picker.reset();
    assert_eq!(picker.timestamp(), Some(MARCH_5));

    picker.set_timestamp(Some(CHRISTMAS));
    picker.set_initial(None);
    picker.clear();
    picker.reset();
    assert_eq!(picker.timestamp(), Some(CHRISTMAS));
    assert_eq!(picker.initial_text(), "December 25, 2024");
}

#[test]
fn test_change_callback_receives_seconds() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut picker = utc_picker(None);
    picker.on_change(move |ts| sink.lock().unwrap().push(ts));

    picker.set_timestamp(Some(MARCH_5));
    picker.set_input("1735151400500").unwrap();
    picker.clear();

    assert_eq!(*seen.lock().unwrap(), vec![Some(MARCH_5), Some(CHRISTMAS), None]);
}

#[test]
fn test_destroy_returns_initial_text() {
    let mut picker = utc_picker(Some(MARCH_5));
    picker.set_timestamp(Some(CHRISTMAS));
    assert_eq!(picker.destroy(), "March 5, 2024");
}

#[test]
fn test_destroy_restores_pre_widget_text() {
    let settings = PickerSettings::default()
        .with_initial_timestamp(MARCH_5)
        .with_initial_text("Pick a publish date");
    let mut picker = DatePicker::new(settings, Zone::Utc);
    assert_eq!(picker.text(), "March 5, 2024");
    assert_eq!(picker.initial_text(), "Pick a publish date");

    picker.set_timestamp(Some(CHRISTMAS));
    assert_eq!(picker.destroy(), "Pick a publish date");
}

#[test]
fn test_settings_from_config() {
    let mut config = webe_date::config::Config::default();
    config.display.date_format = "d/m/Y".to_string();
    config.display.empty_text = "—".to_string();

    let settings = PickerSettings::from_config(&config.display).with_initial_timestamp(MARCH_5);
    let picker = DatePicker::new(settings, config.display.timezone);
    assert_eq!(picker.settings().empty_text, "—");
    assert_eq!(picker.formatted(None), picker.text());
}
