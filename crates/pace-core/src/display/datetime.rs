//! Date, time, and duration display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// The display format follows the pattern `YYYY-MM-DD HH:MM:SS TZ`, with a
/// 24-hour clock and the timezone abbreviation (e.g. UTC, CET, JST).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Logged time as hours and minutes.
///
/// # Examples
///
/// ```rust
/// use pace_core::display::Minutes;
///
/// assert_eq!(Minutes(0).to_string(), "0 min");
/// assert_eq!(Minutes(45).to_string(), "45 min");
/// assert_eq!(Minutes(60).to_string(), "1 h");
/// assert_eq!(Minutes(95).to_string(), "1 h 35 min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(pub u32);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.0 / 60, self.0 % 60);
        match (hours, minutes) {
            (0, m) => write!(f, "{m} min"),
            (h, 0) => write!(f, "{h} h"),
            (h, m) => write!(f, "{h} h {m} min"),
        }
    }
}
