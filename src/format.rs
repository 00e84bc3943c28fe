//! Formatting helpers for amounts and dates.
//!
//! This module turns raw wire values into display strings:
//! - Integer parsing with prefix semantics (`"12abc"` parses as `12`)
//! - Currency formatting in Brazilian real (`R$ 5.000,00`)
//! - Date parsing and `dd/mm/yyyy` formatting in a given time zone

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use num_format::{Locale, ToFormattedString};

use crate::constants::{CENTS_PER_UNIT, CURRENCY_SYMBOL, INVALID_DATE};

// ============================================================================
// Amount
// ============================================================================

/// A parsed monetary amount in the smallest currency unit (centavos).
///
/// `NaN` is the result of parsing a value that does not start with an
/// integer. It is carried through formatting unchanged, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Amount {
    /// A well-formed integer amount.
    Value(i64),
    /// The raw value could not be parsed.
    #[default]
    NaN,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

// ============================================================================
// Integer Parsing
// ============================================================================

/// Parse a base-10 integer from the start of `raw`.
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted,
/// then the longest run of ASCII digits is consumed. Anything after the
/// digits is ignored. Input without digits yields [`Amount::NaN`].
///
/// A value outside `i64` also yields `NaN`. This differs from JavaScript
/// `parseInt`, which returns an imprecise float there.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_int("500000"), Amount::Value(500_000));
/// assert_eq!(parse_int("  -42px"), Amount::Value(-42));
/// assert_eq!(parse_int("abc"), Amount::NaN);
/// ```
#[must_use]
pub fn parse_int(raw: &str) -> Amount {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Amount::NaN;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };

    parsed.map_or(Amount::NaN, Amount::Value)
}

// ============================================================================
// Currency Formatting
// ============================================================================

/// Format an amount in centavos as Brazilian real.
///
/// Uses `.` as the thousands separator and `,` as the decimal mark.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_currency(Amount::Value(500_000)), "R$ 5.000,00");
/// assert_eq!(format_currency(Amount::Value(-150)), "-R$ 1,50");
/// assert_eq!(format_currency(Amount::NaN), "R$ NaN");
/// ```
#[must_use]
pub fn format_currency(amount: Amount) -> String {
    let Amount::Value(cents) = amount else {
        return format!("{CURRENCY_SYMBOL} NaN");
    };

    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let units = (magnitude / CENTS_PER_UNIT).to_formatted_string(&Locale::pt);
    let fraction = magnitude % CENTS_PER_UNIT;

    format!("{sign}{CURRENCY_SYMBOL} {units},{fraction:02}")
}

// ============================================================================
// Date Parsing & Formatting
// ============================================================================

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2020-04-20T15:32:10.000Z`). A timestamp without an
/// offset is read as wall-clock time in `tz`; a bare `YYYY-MM-DD` is read as
/// UTC midnight. Returns `None` when nothing matches.
#[must_use]
pub fn parse_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.fixed_offset());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Format a timestamp as `dd/mm/yyyy` in the given time zone.
///
/// A missing timestamp renders as `Invalid Date`.
#[must_use]
pub fn format_date<Tz>(date: Option<&DateTime<FixedOffset>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match date {
        Some(dt) => dt.with_timezone(tz).format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};
    use insta::assert_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case::plain("500000", Amount::Value(500_000))]
    #[case::zero("0", Amount::Value(0))]
    #[case::negative("-42", Amount::Value(-42))]
    #[case::explicit_plus("+7", Amount::Value(7))]
    #[case::leading_whitespace("  \t100", Amount::Value(100))]
    #[case::trailing_garbage("12abc", Amount::Value(12))]
    #[case::decimal_truncates("19.99", Amount::Value(19))]
    #[case::leading_zeros("0007", Amount::Value(7))]
    #[case::empty("", Amount::NaN)]
    #[case::letters("abc", Amount::NaN)]
    #[case::sign_only("-", Amount::NaN)]
    #[case::space_after_sign("- 5", Amount::NaN)]
    #[case::overflow("99999999999999999999", Amount::NaN)]
    fn test_parse_int(#[case] raw: &str, #[case] expected: Amount) {
        assert_eq!(parse_int(raw), expected);
    }

    #[test]
    fn test_parse_int_extremes() {
        assert_eq!(
            parse_int("-9223372036854775808"),
            Amount::Value(i64::MIN)
        );
        assert_eq!(parse_int("9223372036854775807"), Amount::Value(i64::MAX));
    }

    #[rstest]
    #[case::zero(0, "R$ 0,00")]
    #[case::cents_only(5, "R$ 0,05")]
    #[case::one_real(100, "R$ 1,00")]
    #[case::thousands(500_000, "R$ 5.000,00")]
    #[case::millions(123_456_789, "R$ 1.234.567,89")]
    #[case::negative(-150, "-R$ 1,50")]
    #[case::negative_thousands(-200_000, "-R$ 2.000,00")]
    fn test_format_currency(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(format_currency(Amount::Value(cents)), expected);
    }

    #[test]
    fn test_format_currency_nan() {
        assert_snapshot!(format_currency(Amount::NaN), @"R$ NaN");
    }

    #[test]
    fn test_format_currency_min_value_does_not_overflow() {
        let formatted = format_currency(Amount::Value(i64::MIN));
        assert!(formatted.starts_with("-R$ "));
        assert!(formatted.ends_with(",08"));
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::Value(42).to_string(), "42");
        assert_eq!(Amount::NaN.to_string(), "NaN");
        assert_eq!(Amount::default(), Amount::NaN);
    }

    #[test]
    fn test_parse_date_rfc3339() {
        let dt = parse_date("2020-04-20T15:32:10.000Z", &Utc).unwrap();
        assert_eq!(dt.year(), 2020);
        assert_eq!(dt.month(), 4);
        assert_eq!(dt.day(), 20);
    }

    #[test]
    fn test_parse_date_naive_uses_given_zone() {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = parse_date("2020-04-20T23:30:00", &tz).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -3 * 3600);
        assert_eq!(format_date(Some(&dt), &Utc), "21/04/2020");
    }

    #[test]
    fn test_parse_date_bare_date_is_utc_midnight() {
        let dt = parse_date("2021-01-05", &Utc).unwrap();
        assert_eq!(dt.to_rfc3339(), "2021-01-05T00:00:00+00:00");
    }

    #[rstest]
    #[case::empty("")]
    #[case::garbage("yesterday")]
    #[case::bad_month("2020-13-01")]
    fn test_parse_date_invalid(#[case] raw: &str) {
        assert!(parse_date(raw, &Utc).is_none());
    }

    #[test]
    fn test_format_date_day_month_year() {
        let dt = parse_date("2020-04-02T12:00:00Z", &Utc).unwrap();
        assert_snapshot!(format_date(Some(&dt), &Utc), @"02/04/2020");
    }

    #[test]
    fn test_format_date_shifts_into_zone() {
        let dt = parse_date("2020-04-20T01:00:00Z", &Utc).unwrap();
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_date(Some(&dt), &brasilia), "19/04/2020");
    }

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None, &Utc), "Invalid Date");
    }
}
