//! The caller-built recurrence description.

use serde::{Deserialize, Serialize};

use super::Frequency;

/// A structured description of how an event repeats.
///
/// Built by the caller, typically straight from form input, and read-only
/// for the duration of an encode call. Every list field is a comma-delimited
/// token string; an empty string means the clause is omitted. No validation
/// happens here: tokens are parsed and range-checked by the encoder so that
/// all rejection reporting is centralized.
///
/// The serde names match the Friday form fields (`freq`, `byMonth`, ...), so
/// a form payload deserializes directly into a spec. List fields missing
/// from the payload default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSpec {
    #[serde(rename = "freq")]
    pub frequency: Frequency,
    #[serde(default)]
    pub by_month: String,
    #[serde(default)]
    pub by_month_day: String,
    #[serde(default)]
    pub by_week_no: String,
    #[serde(default)]
    pub by_year_day: String,
    #[serde(default)]
    pub by_set_pos: String,
    #[serde(default)]
    pub by_day: String,
    /// Pre-formatted end-date literal, appended verbatim after `UNTIL=`.
    #[serde(default)]
    pub until: Option<String>,
}

impl RecurrenceSpec {
    /// Creates a spec with the given frequency and every clause omitted.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            by_month: String::new(),
            by_month_day: String::new(),
            by_week_no: String::new(),
            by_year_day: String::new(),
            by_set_pos: String::new(),
            by_day: String::new(),
            until: None,
        }
    }
}
