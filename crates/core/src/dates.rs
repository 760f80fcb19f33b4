//! Loose date parsing and comparison helpers.
//!
//! All functions are total: invalid input degrades to `None` / `false`
//! rather than erroring.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::Timestamp;

/// Parse a loosely-typed date value.
///
/// Accepts RFC 3339 timestamps (`2024-01-01T12:00:00Z`) and bare ISO dates
/// (`2024-01-01`, interpreted as midnight UTC). Returns `None` for anything
/// else.
pub fn safe_date(value: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Whether the given instant is strictly before now.
pub fn is_past(value: Option<Timestamp>) -> bool {
    value.is_some_and(|dt| dt < Utc::now())
}

/// Whether the given instant is strictly after now.
pub fn is_future(value: Option<Timestamp>) -> bool {
    value.is_some_and(|dt| dt > Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parses_bare_iso_date() {
        let dt = safe_date("2024-01-01").expect("bare date should parse");
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let dt = safe_date("2024-06-15T08:30:00Z").expect("rfc3339 should parse");
        assert_eq!(dt.timestamp(), 1718440200);
    }

    #[test]
    fn garbage_degrades_to_none() {
        assert_eq!(safe_date("garbage"), None);
        assert_eq!(safe_date("2024-13-45"), None);
        assert_eq!(safe_date(""), None);
    }

    #[test]
    fn yesterday_is_past_not_future() {
        let yesterday = Some(Utc::now() - Duration::days(1));
        assert!(is_past(yesterday));
        assert!(!is_future(yesterday));
    }

    #[test]
    fn tomorrow_is_future_not_past() {
        let tomorrow = Some(Utc::now() + Duration::days(1));
        assert!(is_future(tomorrow));
        assert!(!is_past(tomorrow));
    }

    #[test]
    fn none_compares_false_both_ways() {
        assert!(!is_past(None));
        assert!(!is_future(None));
    }
}
