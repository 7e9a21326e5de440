//! Recurrence frequency.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The frequency of a recurrence rule (RFC 5545 §3.3.10).
///
/// Only the four calendar-level frequencies the Friday UI exposes are
/// supported; sub-daily frequencies are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

impl Frequency {
    /// Parses a frequency from its rule literal (e.g., "WEEKLY").
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "YEARLY" => Some(Self::Yearly),
            "MONTHLY" => Some(Self::Monthly),
            "WEEKLY" => Some(Self::Weekly),
            "DAILY" => Some(Self::Daily),
            _ => None,
        }
    }

    /// Returns the rule literal emitted after `FREQ=`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
