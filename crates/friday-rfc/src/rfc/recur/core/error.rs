//! Rejection type for recurrence encoding.

use std::fmt::Display;

use thiserror::Error;

use super::Clause;

/// Result type for recurrence encoding operations.
pub type EncodeResult<T> = Result<T, RejectedClause>;

/// Rejection of a whole recurrence spec, naming the first rule part (in
/// validation order) that failed.
///
/// Rejections are ordinary return values; the encoder never notifies the
/// user or retries. Whether to surface the message, correct the input, or
/// abort is the caller's decision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{clause}: {reason}")]
pub struct RejectedClause {
    /// The rule part that failed validation.
    pub clause: Clause,
    /// Human-readable reason for the rejection.
    pub reason: String,
}

impl RejectedClause {
    /// Creates a new rejection.
    #[must_use]
    pub fn new(clause: Clause, reason: impl Into<String>) -> Self {
        Self {
            clause,
            reason: reason.into(),
        }
    }

    /// Creates a rejection for a token that is not an integer.
    #[must_use]
    pub fn not_an_integer(clause: Clause, token: &str) -> Self {
        Self::new(clause, format!("not an integer: {token:?}"))
    }

    /// Creates a rejection for an integer outside the clause's range. Takes
    /// the raw token when the value does not even fit the parsed width.
    #[must_use]
    pub fn out_of_range(clause: Clause, value: impl Display) -> Self {
        Self::new(clause, format!("value out of range: {value}"))
    }

    /// Creates a rejection for a token that is not a plain weekday code.
    #[must_use]
    pub fn invalid_weekday(token: &str) -> Self {
        Self::new(
            Clause::Day,
            format!("expected a weekday code (MO..SU), found {token:?}"),
        )
    }

    /// Creates a rejection for a token that is not an ordinal weekday.
    #[must_use]
    pub fn invalid_ordinal_weekday(token: &str) -> Self {
        Self::new(
            Clause::Day,
            format!("expected an optionally signed ordinal weekday, found {token:?}"),
        )
    }
}
