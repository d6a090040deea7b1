//! PHP `date()`-style timestamp formatting
//!
//! A pattern is scanned one character at a time. Characters found in the token table
//! (see [`tokens::TOKENS`]) are replaced by the matching calendar field of the instant;
//! everything else is copied through unchanged. There is no escape character.
//!
//! ```
//! use chrono::Utc;
//! use webe_date::date::format_in;
//!
//! // 2024-01-01T00:00:00Z
//! assert_eq!(format_in(1_704_067_200_000, "D, M j, Y", &Utc), "Mon, Jan 1, 2024");
//! ```

use chrono::{DateTime, Datelike, Duration, Local, Offset, TimeZone, Timelike, Utc};

pub mod calendar;
pub mod tokens;
pub mod zone;

pub use zone::Zone;

/// Text rendered for an instant that cannot be placed on the calendar
pub const INVALID_DATE: &str = "Invalid Date";

/// Errors reported by [`try_format_in`] and [`Zone`] parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Timestamp out of range: {0} ms")]
    OutOfRange(i64),

    #[error("Invalid time zone '{0}': expected 'local', 'utc' or an offset like '+02:00'")]
    InvalidZone(String),
}

/// An instant broken down into the calendar fields the tokens read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarFields {
    /// Decompose milliseconds since the epoch in the given time zone.
    ///
    /// Returns `None` when the instant is outside the representable calendar range.
    pub fn from_instant<Tz: TimeZone>(instant: i64, tz: &Tz) -> Option<Self> {
        let utc = DateTime::<Utc>::from_timestamp_millis(instant)?;
        let naive = utc.naive_utc();
        let offset = tz.offset_from_utc_datetime(&naive).fix();
        let local = naive.checked_add_signed(Duration::seconds(offset.local_minus_utc().into()))?;

        Some(Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            weekday: local.weekday().num_days_from_sunday(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        })
    }

    /// Render `pattern` against these fields
    pub fn render(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        for c in pattern.chars() {
            match tokens::lookup(c) {
                Some(token) => out.push_str(&token(self)),
                None => out.push(c),
            }
        }
        out
    }
}

/// Format `instant` (milliseconds since the epoch) in the host's local time zone
pub fn format(instant: i64, pattern: &str) -> String {
    format_in(instant, pattern, &Local)
}

/// Format `instant` in an explicit time zone.
///
/// Never fails: an unrepresentable instant yields [`INVALID_DATE`] when the pattern
/// holds any token, and the pattern itself when it is all literals.
pub fn format_in<Tz: TimeZone>(instant: i64, pattern: &str, tz: &Tz) -> String {
    match try_format_in(instant, pattern, tz) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("{}", e);
            if pattern.chars().any(tokens::is_token) {
                INVALID_DATE.to_string()
            } else {
                pattern.to_string()
            }
        }
    }
}

/// Like [`format_in`], but reports an unrepresentable instant as an error
pub fn try_format_in<Tz: TimeZone>(instant: i64, pattern: &str, tz: &Tz) -> Result<String, DateError> {
    let fields = CalendarFields::from_instant(instant, tz).ok_or(DateError::OutOfRange(instant))?;
    let rendered = fields.render(pattern);
    log::trace!("format({}, {:?}) -> {:?}", instant, pattern, rendered);
    Ok(rendered)
}

/// Format with the `(pattern, timestamp)` argument order used by the page scripts
pub fn date_format(pattern: &str, instant: i64) -> String {
    format(instant, pattern)
}

/// A fixed instant that can be rendered with any number of patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WebeDate {
    timestamp: i64,
}

impl WebeDate {
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp }
    }

    /// Milliseconds since the epoch
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Format in the host's local time zone
    pub fn format(&self, pattern: &str) -> String {
        format(self.timestamp, pattern)
    }

    pub fn format_in<Tz: TimeZone>(&self, pattern: &str, tz: &Tz) -> String {
        format_in(self.timestamp, pattern, tz)
    }
}

impl From<i64> for WebeDate {
    fn from(timestamp: i64) -> Self {
        Self::new(timestamp)
    }
}
