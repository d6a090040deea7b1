//! Calendar arithmetic used by the formatter tokens.

/// Days per month for a common year, January first.
pub const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
///
/// Out-of-range months are clamped into 1-12 so the result is always a real month length.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let index = (month.clamp(1, 12) - 1) as usize;
    if index == 1 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[index]
    }
}

/// Left-pad `n` with zeros to `width` digits
///
/// Negative values keep their sign in front of the padding: `lpad(-5, 3)` is `"-005"`.
pub fn lpad(n: i64, width: usize) -> String {
    if n < 0 {
        format!("-{:0width$}", n.unsigned_abs(), width = width)
    } else {
        format!("{:0width$}", n, width = width)
    }
}
