//! Rule-part identifiers.

use std::fmt;

/// One of the BYxxx rule parts the encoder understands.
///
/// Each clause has two names: the rule-part name emitted into the RECUR
/// value (`BYWEEKNO`), and the field name the Friday form uses for the same
/// value (`byWeekNo`). Rejections display the field name so the caller can
/// point at the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    WeekNo,
    YearDay,
    MonthDay,
    Month,
    Day,
    SetPos,
}

impl Clause {
    /// Returns the rule-part name used in the emitted string.
    #[must_use]
    pub fn rule_part(self) -> &'static str {
        match self {
            Self::WeekNo => "BYWEEKNO",
            Self::YearDay => "BYYEARDAY",
            Self::MonthDay => "BYMONTHDAY",
            Self::Month => "BYMONTH",
            Self::Day => "BYDAY",
            Self::SetPos => "BYSETPOS",
        }
    }

    /// Returns the caller-facing field name.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::WeekNo => "byWeekNo",
            Self::YearDay => "byYearDay",
            Self::MonthDay => "byMonthDay",
            Self::Month => "byMonth",
            Self::Day => "byDay",
            Self::SetPos => "bySetPos",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
