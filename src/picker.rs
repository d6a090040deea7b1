//! Date picker value model
//!
//! Holds the state behind a date picker widget: the picked instant, the text the
//! widget displays, and the value it was initialised with. Timestamps cross the
//! public API as Unix seconds (what the server stores) and are kept internally
//! as milliseconds (what the formatter reads).

use std::fmt;

use crate::config::DisplayConfig;
use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_EMPTY_TEXT};
use crate::date::Zone;

/// Errors from interacting with a [`DatePicker`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("Date picker is disabled")]
    Disabled,

    #[error("Invalid date picker input: '{0}'")]
    InvalidInput(String),
}

/// Callback invoked with the new Unix timestamp whenever the value changes
pub type ChangeCallback = Box<dyn FnMut(Option<i64>) + Send>;

/// Construction settings for a [`DatePicker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSettings {
    /// Pattern used to render the value
    pub format: String,
    /// Text shown when no value is set
    pub empty_text: String,
    /// Form field name
    pub name: Option<String>,
    /// Validation rules passed through to the form layer
    pub validation: Option<String>,
    /// Initial value in Unix seconds; zero or negative means empty
    pub initial_timestamp: Option<i64>,
    /// Text the display element held before the picker took it over; restored by
    /// [`DatePicker::destroy`]. Defaults to the first rendered text.
    pub initial_text: Option<String>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            name: None,
            validation: None,
            initial_timestamp: None,
            initial_text: None,
        }
    }
}

impl PickerSettings {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            format: display.date_format.clone(),
            empty_text: display.empty_text.clone(),
            ..Self::default()
        }
    }

    pub fn with_initial_timestamp(mut self, seconds: i64) -> Self {
        self.initial_timestamp = Some(seconds);
        self
    }

    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = Some(text.into());
        self
    }
}

pub struct DatePicker {
    settings: PickerSettings,
    zone: Zone,
    /// Milliseconds since the epoch
    timestamp: Option<i64>,
    text: String,
    initial_text: String,
    disabled: bool,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("settings", &self.settings)
            .field("zone", &self.zone)
            .field("timestamp", &self.timestamp)
            .field("text", &self.text)
            .field("initial_text", &self.initial_text)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

fn seconds_to_millis(seconds: i64) -> i64 {
    seconds.saturating_mul(1000)
}

impl DatePicker {
    pub fn new(settings: PickerSettings, zone: Zone) -> Self {
        let timestamp = settings
            .initial_timestamp
            .filter(|s| *s > 0)
            .map(seconds_to_millis);
        let text = match timestamp {
            Some(ms) => zone.format(ms, &settings.format),
            None => settings.empty_text.clone(),
        };
        let initial_text = settings.initial_text.clone().unwrap_or_else(|| text.clone());

        Self {
            settings,
            zone,
            timestamp,
            initial_text,
            text,
            disabled: false,
            on_change: None,
        }
    }

    /// Register the change callback, replacing any previous one
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(Option<i64>) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    /// Current display text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current value in Unix seconds, floored
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp.map(|ms| ms.div_euclid(1000))
    }

    /// Current value in milliseconds
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp
    }

    /// Render the value with `pattern`, or with the stored pattern when `None`
    pub fn formatted(&self, pattern: Option<&str>) -> String {
        match self.timestamp {
            Some(ms) => self.zone.format(ms, pattern.unwrap_or(&self.settings.format)),
            None => self.settings.empty_text.clone(),
        }
    }

    /// Set the value from Unix seconds; `None` or zero clears it
    pub fn set_timestamp(&mut self, seconds: Option<i64>) {
        let millis = seconds.filter(|s| *s != 0).map(seconds_to_millis);
        self.apply(millis);
    }

    /// Set the value from the raw millisecond string a hidden form input holds
    pub fn set_input(&mut self, raw: &str) -> Result<(), PickerError> {
        if self.disabled {
            return Err(PickerError::Disabled);
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.apply(None);
            return Ok(());
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| PickerError::InvalidInput(raw.to_string()))?;
        if !value.is_finite() {
            return Err(PickerError::InvalidInput(raw.to_string()));
        }

        // `as` saturates at the i64 bounds
        let millis = value.floor() as i64;
        self.apply(Some(millis).filter(|ms| *ms != 0));
        Ok(())
    }

    fn apply(&mut self, millis: Option<i64>) {
        self.timestamp = millis;
        self.text = self.formatted(None);
        log::debug!("Date picker value changed to {:?} ({})", self.timestamp, self.text);

        let seconds = self.timestamp();
        if let Some(callback) = self.on_change.as_mut() {
            callback(seconds);
        }
    }

    /// Record a new initial value, or snapshot the current one when `None`.
    ///
    /// Without an explicit text, the initial text is the rendered timestamp.
    pub fn set_initial(&mut self, initial: Option<(i64, Option<String>)>) {
        match initial {
            Some((seconds, text)) => {
                self.settings.initial_timestamp = Some(seconds);
                self.initial_text =
                    text.unwrap_or_else(|| self.zone.format(seconds_to_millis(seconds), &self.settings.format));
            }
            None => {
                self.settings.initial_timestamp = self.timestamp();
                self.initial_text = self.text.clone();
            }
        }
    }

    /// Initial display text
    pub fn initial_text(&self) -> &str {
        &self.initial_text
    }

    /// Return to the initial value
    pub fn reset(&mut self) {
        self.set_timestamp(self.settings.initial_timestamp);
    }

    /// Remove the value
    pub fn clear(&mut self) {
        self.set_timestamp(None);
    }

    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Tear down the picker, returning the text to restore into the display element
    pub fn destroy(self) -> String {
        self.initial_text
    }
}
