//! Parsing of the string-typed fields of a [`Message`](crate::types::Message).
//!
//! The lenient parsers never fail: a value that is not a number becomes
//! `None` and flows into the series unchanged. The strict parsers reject
//! the same inputs with a [`ChartError`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ChartError, ChartResult};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a count the way `parseInt(value, 10)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted and the
/// longest run of ASCII digits is taken; anything after it is ignored.
/// Returns `None` when there are no digits or the value overflows `i64`.
pub fn parse_count(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a count, requiring the whole trimmed string to be an integer.
pub fn parse_count_strict(value: &str, channel_id: &str) -> ChartResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ChartError::InvalidCount {
            channel_id: channel_id.to_string(),
            value: value.to_string(),
        })
}

/// Convert a time bucket to epoch milliseconds.
///
/// Accepts RFC 3339 timestamps, zone-less date-times and bare dates.
/// Zone-less values are taken as UTC. Returns `None` for anything else.
pub fn parse_time_bucket(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Convert a time bucket to epoch milliseconds, failing on unknown formats.
pub fn parse_time_bucket_strict(value: &str, channel_id: &str) -> ChartResult<i64> {
    parse_time_bucket(value).ok_or_else(|| ChartError::InvalidTimeBucket {
        channel_id: channel_id.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_plain_integers() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("007"), Some(7));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("+12"), Some(12));
    }

    #[test]
    fn test_count_takes_leading_digits() {
        assert_eq!(parse_count("  42"), Some(42));
        assert_eq!(parse_count("12abc"), Some(12));
        assert_eq!(parse_count("3.9"), Some(3));
        assert_eq!(parse_count("1e5"), Some(1));
    }

    #[test]
    fn test_count_not_a_number() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-"), None);
        assert_eq!(parse_count("   "), None);
        assert_eq!(parse_count("99999999999999999999999"), None);
    }

    #[test]
    fn test_count_strict() {
        assert_eq!(parse_count_strict(" 8 ", "a").unwrap(), 8);
        assert!(parse_count_strict("12abc", "a").is_err());

        match parse_count_strict("many", "general") {
            Err(ChartError::InvalidCount { channel_id, value }) => {
                assert_eq!(channel_id, "general");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_time_bucket_formats() {
        // 2024-01-01T00:00:00Z
        let midnight = 1_704_067_200_000;
        assert_eq!(parse_time_bucket("2024-01-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_time_bucket("2024-01-01T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_time_bucket("2024-01-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_time_bucket("2024-01-01T00:00:00"), Some(midnight));
        assert_eq!(parse_time_bucket("2024-01-01 00:00:00"), Some(midnight));
        assert_eq!(parse_time_bucket("2024-01-01T00:00"), Some(midnight));
        assert_eq!(parse_time_bucket("2024-01-01"), Some(midnight));
        assert_eq!(parse_time_bucket(" 2024-01-01 "), Some(midnight));
    }

    #[test]
    fn test_time_bucket_keeps_milliseconds() {
        assert_eq!(
            parse_time_bucket("2024-01-01T00:00:00.250Z"),
            Some(1_704_067_200_250)
        );
    }

    #[test]
    fn test_time_bucket_invalid() {
        assert_eq!(parse_time_bucket(""), None);
        assert_eq!(parse_time_bucket("yesterday"), None);
        assert_eq!(parse_time_bucket("2024-13-01"), None);
        assert_eq!(parse_time_bucket("2024-02-30"), None);

        match parse_time_bucket_strict("soon", "random") {
            Err(ChartError::InvalidTimeBucket { channel_id, value }) => {
                assert_eq!(channel_id, "random");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
