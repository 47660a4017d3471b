//! Publication-date normalization.

use chrono::{DateTime, NaiveDate};

use crate::error::CollectError;

/// Parse a feed timestamp into the calendar date it names.
///
/// RSS `pubDate` values are RFC 2822 (`Mon, 06 Oct 2025 10:00:00 GMT`); Atom
/// and Dublin Core dates are RFC 3339. The date is taken in the timestamp's
/// own offset, so `Tue, 07 Oct 2025 01:00:00 +0800` is the 7th.
///
/// # Errors
///
/// Returns [`CollectError::InvalidDate`] when neither format applies.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, CollectError> {
    let value = raw.trim();
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|ts| ts.date_naive())
        .map_err(|_| CollectError::InvalidDate {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_rfc2822_with_gmt() {
        assert_eq!(
            parse_entry_date("Mon, 06 Oct 2025 10:00:00 GMT").unwrap(),
            date(2025, 10, 6)
        );
    }

    #[test]
    fn parses_rfc2822_with_numeric_offset() {
        assert_eq!(
            parse_entry_date("Fri, 03 Oct 2025 23:30:00 -0400").unwrap(),
            date(2025, 10, 3)
        );
    }

    #[test]
    fn keeps_date_in_feed_offset() {
        assert_eq!(
            parse_entry_date("Tue, 07 Oct 2025 01:00:00 +0800").unwrap(),
            date(2025, 10, 7)
        );
    }

    #[test]
    fn parses_rfc3339() {
        assert_eq!(
            parse_entry_date("2025-10-02T08:15:00Z").unwrap(),
            date(2025, 10, 2)
        );
        assert_eq!(
            parse_entry_date(" 2025-10-02T08:15:00+01:00 ").unwrap(),
            date(2025, 10, 2)
        );
    }

    #[test]
    fn rejects_unrecognized_format() {
        let err = parse_entry_date("last Tuesday").unwrap_err();
        assert!(
            matches!(err, CollectError::InvalidDate { ref value } if value == "last Tuesday"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_empty_value() {
        assert!(parse_entry_date("   ").is_err());
    }
}
