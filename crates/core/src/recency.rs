//! Chronological sort keys for project dates.
//!
//! Project dates are written as `"YYYY"` or `"YYYY-MM"` (the month may be a
//! single digit, e.g. `"2023-1"`). [`recency_key`] turns such a string into
//! a [`RecencyKey`]: Unix seconds at midnight UTC on the first day of that
//! month. Absent and malformed dates both collapse to [`RecencyKey::MIN`] so
//! they sort as the oldest entries.

use chrono::NaiveDate;
use serde::Serialize;

/// Totally ordered recency value. Larger is more recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecencyKey(i64);

impl RecencyKey {
    /// Key assigned to projects with no usable date.
    pub const MIN: RecencyKey = RecencyKey(i64::MIN);

    /// Unix timestamp (seconds) of the first instant of the month.
    pub fn as_timestamp(self) -> i64 {
        self.0
    }
}

/// Split a `"YYYY"` / `"YYYY-M"` / `"YYYY-MM"` string into year and month.
///
/// Returns `None` for anything else: empty input, non-digit characters,
/// more than two segments, an empty month segment, or a month outside
/// `1..=12`. A missing month means January.
pub fn parse_year_month(value: &str) -> Option<(i32, u32)> {
    let mut parts = value.split('-');
    let year_part = parts.next()?;
    let month_part = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let year: i32 = parse_digits(year_part)?;
    let month: u32 = match month_part {
        None => 1,
        Some(m) if m.len() <= 2 => parse_digits(m)?,
        Some(_) => return None,
    };

    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

/// Convert an optional project date into its sort key.
///
/// # Examples
///
/// ```
/// use folio_core::recency::{recency_key, RecencyKey};
///
/// assert!(recency_key(Some("2024-11")) > recency_key(Some("2024-2")));
/// assert_eq!(recency_key(Some("2023")), recency_key(Some("2023-01")));
/// assert_eq!(recency_key(None), RecencyKey::MIN);
/// assert_eq!(recency_key(Some("soon")), RecencyKey::MIN);
/// ```
pub fn recency_key(value: Option<&str>) -> RecencyKey {
    value
        .and_then(parse_year_month)
        .and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| RecencyKey(dt.and_utc().timestamp()))
        .unwrap_or(RecencyKey::MIN)
}

fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
