//! Weekday values for BYDAY rule parts.

use std::fmt;

/// A day of the week (RFC 5545 §3.3.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Parses a weekday from its two-letter code (e.g., "MO").
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MO" => Some(Self::Monday),
            "TU" => Some(Self::Tuesday),
            "WE" => Some(Self::Wednesday),
            "TH" => Some(Self::Thursday),
            "FR" => Some(Self::Friday),
            "SA" => Some(Self::Saturday),
            "SU" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns the two-letter code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weekday with an optional ordinal prefix (e.g., "2FR" for the second
/// Friday, "-1MO" for the last Monday).
///
/// A missing ordinal means every matching weekday in the period. Display is
/// canonical: no `+` sign, so a spec written as `+2FR` encodes as `2FR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayNum {
    /// Nonzero ordinal in `[-53, 53]`, if any.
    pub ordinal: Option<i8>,
    pub weekday: Weekday,
}

impl WeekdayNum {
    /// A plain weekday token with no ordinal.
    #[must_use]
    pub fn plain(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal}")?;
        }
        f.write_str(self.weekday.as_str())
    }
}
