//! Recurrence-rule encoding (RFC 5545 §3.3.10).
//!
//! This module converts a structured recurrence description into a RECUR
//! value string:
//! - Core: the data model (`RecurrenceSpec`, frequencies, weekdays, clauses)
//! - Parse: clause-value parsers turning delimited token strings into typed
//!   lists, or a field-level rejection
//! - Build: the per-frequency validation and emission cascade
//!
//! Validation is all-or-nothing: the first rule part that fails rejects the
//! whole spec, and no partially assembled string is ever returned. Emission
//! order is fixed per frequency so identical specs always encode to the
//! identical string.

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{encode, floating_literal, utc_literal};
pub use self::core::{
    Clause, EncodeResult, Frequency, RecurrenceSpec, RejectedClause, Weekday, WeekdayNum,
};
