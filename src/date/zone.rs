//! Time zone selection for callers that pick the zone at runtime.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DateError;

/// The zone a timestamp is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// Host local time, as the browser scripts did
    #[default]
    Local,
    Utc,
    /// A fixed offset east of UTC
    Fixed(FixedOffset),
}

impl Zone {
    pub fn format(&self, instant: i64, pattern: &str) -> String {
        match self {
            Zone::Local => super::format_in(instant, pattern, &Local),
            Zone::Utc => super::format_in(instant, pattern, &Utc),
            Zone::Fixed(offset) => super::format_in(instant, pattern, offset),
        }
    }

    pub fn try_format(&self, instant: i64, pattern: &str) -> Result<String, DateError> {
        match self {
            Zone::Local => super::try_format_in(instant, pattern, &Local),
            Zone::Utc => super::try_format_in(instant, pattern, &Utc),
            Zone::Fixed(offset) => super::try_format_in(instant, pattern, offset),
        }
    }
}

/// Parses `local`, `utc`, or an offset written `H`, `HH`, `H:MM`, `HH:MM` or `HHMM`
/// after a sign, such as `+02:00`, `-0530` or `+1`
impl FromStr for Zone {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Zone::Local),
            "utc" | "z" => return Ok(Zone::Utc),
            _ => {}
        }

        let invalid = || DateError::InvalidZone(s.to_string());
        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let (hour_part, minute_part) = match rest.split_once(':') {
            Some((h, m)) if (1..=2).contains(&h.len()) && m.len() == 2 => (h, m),
            Some(_) => return Err(invalid()),
            None => match rest.len() {
                1 | 2 => (rest, "0"),
                4 if all_digits(rest) => (&rest[..2], &rest[2..]),
                _ => return Err(invalid()),
            },
        };
        if !all_digits(hour_part) || !all_digits(minute_part) {
            return Err(invalid());
        }
        let hours: i32 = hour_part.parse().map_err(|_| invalid())?;
        let minutes: i32 = minute_part.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Utc => write!(f, "utc"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_zones() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!("UTC".parse::<Zone>().unwrap(), Zone::Utc);
    }

    #[test]
    fn test_parse_offsets() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!("+02:00".parse::<Zone>().unwrap(), Zone::Fixed(plus_two));
        assert_eq!("+0200".parse::<Zone>().unwrap(), Zone::Fixed(plus_two));
        assert_eq!("+2".parse::<Zone>().unwrap(), Zone::Fixed(plus_two));

        let minus = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!("-05:30".parse::<Zone>().unwrap(), Zone::Fixed(minus));

        let plus_ninety = FixedOffset::east_opt(3600 + 30 * 60).unwrap();
        assert_eq!("+1:30".parse::<Zone>().unwrap(), Zone::Fixed(plus_ninety));
        assert_eq!("+0130".parse::<Zone>().unwrap(), Zone::Fixed(plus_ninety));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("mars".parse::<Zone>().is_err());
        assert!("+25:00".parse::<Zone>().is_err());
        assert!("+1:2:3".parse::<Zone>().is_err());
        assert!("".parse::<Zone>().is_err());
        assert!("+1:2".parse::<Zone>().is_err());
        assert!("+:12".parse::<Zone>().is_err());
        assert!("+12:".parse::<Zone>().is_err());
        assert!("+123".parse::<Zone>().is_err());
        assert!("+1a".parse::<Zone>().is_err());
        assert!("+".parse::<Zone>().is_err());
        assert!("+1é1".parse::<Zone>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["local", "utc", "+02:00", "-05:30"] {
            let zone: Zone = s.parse().unwrap();
            assert_eq!(zone.to_string(), s);
        }
    }
}
