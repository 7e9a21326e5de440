//! Recurrence core models (RFC 5545 §3.3.10).
//!
//! These types carry no validation of their own; validation lives in the
//! parse and build layers so that rejection reporting stays centralized and
//! consistently ordered.

mod clause;
mod error;
mod frequency;
mod spec;
mod weekday;

pub use clause::Clause;
pub use error::{EncodeResult, RejectedClause};
pub use frequency::Frequency;
pub use spec::RecurrenceSpec;
pub use weekday::{Weekday, WeekdayNum};
