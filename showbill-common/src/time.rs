//! Timestamp utilities and past/upcoming partitioning
//!
//! Show start times are stored as RFC 3339 UTC TEXT with second precision.
//! The fixed encoding keeps lexicographic order equal to chronological
//! order, so SQL comparisons against a bound "now" string are correct.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Encode a timestamp into the storage form, e.g. `2026-08-06T20:00:00Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored or submitted RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::InvalidInput(format!("Invalid timestamp '{}': {}", raw, e)))
}

/// Whether a show starting at `start_time` counts as upcoming for detail
/// views. The boundary is inclusive: a show starting exactly now is upcoming.
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time >= now
}

/// Split timestamped items into (past, upcoming) relative to `now`.
///
/// Every item lands in exactly one bucket; `start_time == now` goes to
/// upcoming. Relative order within each bucket is preserved.
pub fn split_past_upcoming<T>(
    items: Vec<(DateTime<Utc>, T)>,
    now: DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (start_time, item) in items {
        if is_upcoming(start_time, now) {
            upcoming.push(item);
        } else {
            past.push(item);
        }
    }
    (past, upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn format_parse_round_trip() {
        let ts = at(1_767_225_600);
        let encoded = format_timestamp(ts);
        assert_eq!(parse_timestamp(&encoded).unwrap(), ts);
    }

    #[test]
    fn encoded_order_matches_chronological_order() {
        let earlier = format_timestamp(at(1_700_000_000));
        let later = format_timestamp(at(1_700_000_001));
        assert!(earlier < later);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_timestamp("next tuesday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn split_is_a_strict_bipartition() {
        let now = at(1000);
        let items = vec![(at(500), "a"), (at(1000), "b"), (at(1500), "c")];
        let (past, upcoming) = split_past_upcoming(items, now);
        assert_eq!(past, vec!["a"]);
        assert_eq!(upcoming, vec!["b", "c"]);
        assert_eq!(past.len() + upcoming.len(), 3);
    }

    #[test]
    fn boundary_start_time_equal_to_now_is_upcoming() {
        let now = at(1000);
        assert!(is_upcoming(at(1000), now));
        assert!(!is_upcoming(at(999), now));
    }

    #[test]
    fn split_preserves_order_within_buckets() {
        let now = at(100);
        let items = vec![(at(10), 1), (at(200), 2), (at(20), 3), (at(300), 4)];
        let (past, upcoming) = split_past_upcoming(items, now);
        assert_eq!(past, vec![1, 3]);
        assert_eq!(upcoming, vec![2, 4]);
    }
}
