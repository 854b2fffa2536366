//! Duration tokens such as `1.5 hours` or `45 m`.

use std::sync::LazyLock;

use regex::Regex;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s+([a-z]+)$").expect("duration pattern compiles")
});

/// Parses `<number> <unit>` into whole minutes.
///
/// Hours (`hour`, `hours`, `hr`, `hrs`, `h`) are multiplied by 60 and
/// rounded; minutes (`minute`, `minutes`, `min`, `mins`, `m`) are rounded.
/// Units are case-insensitive. Anything else, including bare numbers and
/// day units, is rejected with a description of the problem.
///
/// # Examples
///
/// ```rust
/// use pace_core::codec::parse_duration;
///
/// assert_eq!(parse_duration("1.5 hours"), Ok(90));
/// assert_eq!(parse_duration("45 m"), Ok(45));
/// assert!(parse_duration("1 day").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<u32, String> {
    let input = input.trim();
    let captures = DURATION_RE
        .captures(input)
        .ok_or_else(|| format!("expected '<number> <unit>', got '{input}'"))?;

    let value: f64 = captures[1]
        .parse()
        .map_err(|_| format!("invalid number in duration '{input}'"))?;
    let unit = captures[2].to_ascii_lowercase();

    let minutes = match unit.as_str() {
        "hour" | "hours" | "hr" | "hrs" | "h" => (value * 60.0).round(),
        "minute" | "minutes" | "min" | "mins" | "m" => value.round(),
        _ => return Err(format!("unsupported duration unit '{}'", &captures[2])),
    };

    if minutes > f64::from(u32::MAX) {
        return Err(format!("duration '{input}' is too large"));
    }
    Ok(minutes as u32)
}

/// Renders stored minutes the way [`parse_duration`] reads them back.
///
/// Whole hours render as `1 hour` / `N hours`; anything else as hours with
/// one decimal place, always plural. Precision below six minutes is lost.
///
/// # Examples
///
/// ```rust
/// use pace_core::codec::format_duration;
///
/// assert_eq!(format_duration(60), "1 hour");
/// assert_eq!(format_duration(120), "2 hours");
/// assert_eq!(format_duration(30), "0.5 hours");
/// ```
pub fn format_duration(minutes: u32) -> String {
    if minutes % 60 == 0 {
        let hours = minutes / 60;
        if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{hours} hours")
        }
    } else {
        format!("{:.1} hours", f64::from(minutes) / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_duration("1 hour"), Ok(60));
        assert_eq!(parse_duration("2 hours"), Ok(120));
        assert_eq!(parse_duration("1.5 hours"), Ok(90));
        assert_eq!(parse_duration("1 HOUR"), Ok(60));
        assert_eq!(parse_duration("3 hrs"), Ok(180));
        assert_eq!(parse_duration("0.25 h"), Ok(15));
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_duration("90 minutes"), Ok(90));
        assert_eq!(parse_duration("45 m"), Ok(45));
        assert_eq!(parse_duration("1 Minute"), Ok(1));
        assert_eq!(parse_duration("30 mins"), Ok(30));
        assert_eq!(parse_duration("  20 min  "), Ok(20));
    }

    #[test]
    fn test_parse_rejects_unsupported_forms() {
        assert!(parse_duration("one hour").is_err());
        assert!(parse_duration("1 day").is_err());
        assert!(parse_duration("60").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("about 2 hours").is_err());
        assert!(parse_duration("-1 hours").is_err());
    }

    #[test]
    fn test_format_whole_hours() {
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(120), "2 hours");
        assert_eq!(format_duration(0), "0 hours");
    }

    #[test]
    fn test_format_fractional_hours() {
        assert_eq!(format_duration(30), "0.5 hours");
        assert_eq!(format_duration(90), "1.5 hours");
        assert_eq!(format_duration(75), "1.2 hours");
        assert_eq!(format_duration(6), "0.1 hours");
    }

    #[test]
    fn test_format_parses_back() {
        for minutes in [6, 30, 60, 90, 120, 150, 600] {
            assert_eq!(parse_duration(&format_duration(minutes)), Ok(minutes));
        }
        // Quarter hours fall between one-decimal steps.
        assert_eq!(parse_duration(&format_duration(75)), Ok(72));
    }
}
