//! Shared fixtures for recurrence encoding tests.

use crate::rfc::recur::core::{Frequency, RecurrenceSpec};

/// A pre-formatted UNTIL literal used across tests.
pub const UNTIL_NEW_YEAR: &str = "20240101T000000Z";

/// A spec with the given frequency and every clause empty.
pub fn bare(frequency: Frequency) -> RecurrenceSpec {
    RecurrenceSpec::new(frequency)
}

/// A spec with the given frequency and BYDAY field.
pub fn with_days(frequency: Frequency, by_day: &str) -> RecurrenceSpec {
    let mut spec = RecurrenceSpec::new(frequency);
    spec.by_day = by_day.to_owned();
    spec
}
