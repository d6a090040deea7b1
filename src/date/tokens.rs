//! The token table: one pure function per recognized pattern character.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::calendar::{days_in_month, is_leap_year, lpad};
use super::CalendarFields;

/// Renders one token from the decomposed calendar fields
pub type TokenFn = fn(&CalendarFields) -> String;

pub const DAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const DAY_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
pub const MONTH_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const MONTH_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Every character the formatter replaces
pub const TOKENS: &str = "dDjlwFmMntLYaAgGhHis";

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn month_index(fields: &CalendarFields) -> usize {
    (fields.month - 1) as usize
}

static TOKEN_TABLE: Lazy<HashMap<char, TokenFn>> = Lazy::new(|| {
    let mut table: HashMap<char, TokenFn> = HashMap::with_capacity(TOKENS.len());

    // day
    table.insert('d', |f| lpad(f.day.into(), 2));
    table.insert('D', |f| DAY_SHORT[f.weekday as usize].to_string());
    table.insert('j', |f| f.day.to_string());
    table.insert('l', |f| DAY_LONG[f.weekday as usize].to_string());
    table.insert('w', |f| f.weekday.to_string());

    // month
    table.insert('F', |f| MONTH_LONG[month_index(f)].to_string());
    table.insert('m', |f| lpad(f.month.into(), 2));
    table.insert('M', |f| MONTH_SHORT[month_index(f)].to_string());
    table.insert('n', |f| f.month.to_string());
    table.insert('t', |f| days_in_month(f.year, f.month).to_string());

    // year
    table.insert('L', |f| u8::from(is_leap_year(f.year)).to_string());
    table.insert('Y', |f| f.year.to_string());

    // time
    table.insert('a', |f| (if f.hour < 12 { "am" } else { "pm" }).to_string());
    table.insert('A', |f| (if f.hour < 12 { "AM" } else { "PM" }).to_string());
    table.insert('g', |f| hour12(f.hour).to_string());
    table.insert('G', |f| f.hour.to_string());
    table.insert('h', |f| lpad(hour12(f.hour).into(), 2));
    table.insert('H', |f| lpad(f.hour.into(), 2));
    table.insert('i', |f| lpad(f.minute.into(), 2));
    table.insert('s', |f| lpad(f.second.into(), 2));

    table
});

/// Look up the renderer for a pattern character
pub fn lookup(token: char) -> Option<TokenFn> {
    TOKEN_TABLE.get(&token).copied()
}

/// Whether `c` is a recognized token character
pub fn is_token(c: char) -> bool {
    TOKEN_TABLE.contains_key(&c)
}
