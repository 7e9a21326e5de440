//! Recurrence-rule assembly.
//!
//! This module turns a validated spec into its RECUR value string:
//! - Encoder: per-frequency validation and emission cascade
//! - Until: date-literal formatting for the `UNTIL=` segment

mod encoder;
mod until;

pub use encoder::encode;
pub use until::{floating_literal, utc_literal};
