//! Show time parsing and display
//!
//! Show times are stored as naive UTC timestamps with second precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Formats accepted from the show form, tried in order
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Display style for show times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

/// Parse a submitted start time
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, the `T`-separated variant produced by
/// `<input type="datetime-local">`, RFC 3339 with an offset (converted to
/// UTC) and a bare date (midnight).
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("This field is required.".to_string());
    }

    let parsed = INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).naive_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match parsed {
        // Drop sub-second precision so stored text compares cleanly
        Some(dt) => Ok(dt.with_nanosecond(0).unwrap_or(dt)),
        None => Err(format!("Not a valid date and time: {}", input)),
    }
}

/// Current time in the stored representation
pub fn now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Render a show time for pages
pub fn format_datetime(value: &NaiveDateTime, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_accepted_formats() {
        let expected = dt("2019-05-21 21:30:00");
        assert_eq!(parse_start_time("2019-05-21 21:30:00").unwrap(), expected);
        assert_eq!(parse_start_time("2019-05-21 21:30").unwrap(), expected);
        assert_eq!(parse_start_time("2019-05-21T21:30").unwrap(), expected);
        assert_eq!(parse_start_time("2019-05-21T21:30:00.000Z").unwrap(), expected);
        assert_eq!(parse_start_time("2019-05-21T23:30:00+02:00").unwrap(), expected);
        assert_eq!(
            parse_start_time("2019-05-21").unwrap(),
            dt("2019-05-21 00:00:00")
        );
    }

    #[test]
    fn test_parse_rejects_nonsense() {
        assert!(parse_start_time("").is_err());
        assert!(parse_start_time("tomorrow").is_err());
        assert!(parse_start_time("2019-13-40 10:00").is_err());
    }

    #[test]
    fn test_format_full_and_medium() {
        let value = dt("2019-05-21 21:30:00");
        assert_eq!(
            format_datetime(&value, DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
        assert_eq!(
            format_datetime(&value, DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn test_now_has_no_fraction() {
        assert_eq!(now().nanosecond(), 0);
    }
}
