//! Module-level tests for recurrence encoding.

mod fixtures;
