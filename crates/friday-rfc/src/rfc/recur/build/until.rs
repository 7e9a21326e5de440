//! Date-literal formatting for the `UNTIL=` segment.
//!
//! The encoder treats the `until` field as an opaque pre-formatted string;
//! these helpers produce that string for callers holding a chrono value.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Formats a UTC instant as an UNTIL literal (e.g., `20240101T000000Z`).
#[must_use]
pub fn utc_literal(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Formats a floating local date-time as an UNTIL literal with no zone
/// designator (e.g., `20240101T000000`).
#[must_use]
pub fn floating_literal(local: NaiveDateTime) -> String {
    local.format("%Y%m%dT%H%M%S").to_string()
}
