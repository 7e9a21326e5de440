//! Parsers for the delimited token strings of a recurrence spec.
//!
//! Each parser turns one clause's raw string into a typed list, or rejects
//! the whole clause at the first bad token. String splitting happens only
//! here; the range checks and the encoder never see raw tokens. An empty
//! string is always valid and parses to an empty list (clause omitted).

use std::num::IntErrorKind;

use crate::rfc::recur::core::{Clause, EncodeResult, RejectedClause, Weekday, WeekdayNum};

/// Numeric bounds for one integer-list rule part.
struct Bounds {
    min: i16,
    max: i16,
    zero_allowed: bool,
}

/// Parses a comma-delimited list of integers within the given bounds.
fn integer_list(s: &str, clause: Clause, bounds: &Bounds) -> EncodeResult<Vec<i16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .map(|token| {
            let token = token.trim();
            let value = token.parse::<i16>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    RejectedClause::out_of_range(clause, token)
                }
                _ => RejectedClause::not_an_integer(clause, token),
            })?;
            if value < bounds.min || value > bounds.max || (value == 0 && !bounds.zero_allowed) {
                return Err(RejectedClause::out_of_range(clause, value));
            }
            Ok(value)
        })
        .collect()
}

/// Parses a BYMONTH list: integers in `[1, 12]`.
///
/// ## Errors
/// Returns a rejection of `byMonth` at the first bad token.
pub fn month_list(s: &str) -> EncodeResult<Vec<i16>> {
    integer_list(
        s,
        Clause::Month,
        &Bounds {
            min: 1,
            max: 12,
            zero_allowed: false,
        },
    )
}

/// Parses a BYMONTHDAY list: integers in `[1, 31]`.
///
/// ## Errors
/// Returns a rejection of `byMonthDay` at the first bad token.
pub fn month_day_list(s: &str) -> EncodeResult<Vec<i16>> {
    integer_list(
        s,
        Clause::MonthDay,
        &Bounds {
            min: 1,
            max: 31,
            zero_allowed: false,
        },
    )
}

/// Parses a BYWEEKNO list: nonzero integers in `[-53, 53]`.
///
/// ## Errors
/// Returns a rejection of `byWeekNo` at the first bad token.
pub fn week_number_list(s: &str) -> EncodeResult<Vec<i16>> {
    integer_list(
        s,
        Clause::WeekNo,
        &Bounds {
            min: -53,
            max: 53,
            zero_allowed: false,
        },
    )
}

/// Parses a BYYEARDAY or BYSETPOS list: nonzero integers in `[-366, 366]`.
///
/// The two rule parts share one range, so the caller names the clause to
/// report on failure.
///
/// ## Errors
/// Returns a rejection of the given clause at the first bad token.
pub fn occurrence_list(s: &str, clause: Clause) -> EncodeResult<Vec<i16>> {
    integer_list(
        s,
        clause,
        &Bounds {
            min: -366,
            max: 366,
            zero_allowed: false,
        },
    )
}

/// Parses a BYDAY list in the plain grammar: weekday codes only.
///
/// ## Errors
/// Returns a rejection of `byDay` at the first token that is not one of the
/// seven two-letter codes.
pub fn weekday_list(s: &str) -> EncodeResult<Vec<Weekday>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .map(|token| {
            let token = token.trim();
            Weekday::parse(token).ok_or_else(|| RejectedClause::invalid_weekday(token))
        })
        .collect()
}

/// Parses a BYDAY list in the ordinal grammar: each token an optional sign,
/// an optional ordinal magnitude in `[1, 53]`, then a weekday code.
///
/// ## Errors
/// Returns a rejection of `byDay` at the first malformed token.
pub fn weekday_num_list(s: &str) -> EncodeResult<Vec<WeekdayNum>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .map(|token| {
            let token = token.trim();
            weekday_num(token).ok_or_else(|| RejectedClause::invalid_ordinal_weekday(token))
        })
        .collect()
}

/// Parses a single ordinal-weekday token ("MO", "2FR", "-1MO").
///
/// A sign with no magnitude ("+MO") is not a valid token.
fn weekday_num(token: &str) -> Option<WeekdayNum> {
    // The split offset is in bytes; a multi-byte character straddling it
    // means the token cannot end in a two-letter code.
    if token.len() < 2 || !token.is_char_boundary(token.len() - 2) {
        return None;
    }

    let (prefix, code) = token.split_at(token.len() - 2);
    let weekday = Weekday::parse(code)?;

    if prefix.is_empty() {
        return Some(WeekdayNum::plain(weekday));
    }

    let ordinal = prefix.parse::<i8>().ok()?;
    if ordinal == 0 || !(-53..=53).contains(&ordinal) {
        return None;
    }

    Some(WeekdayNum { ordinal: Some(ordinal), weekday })
}

#[cfg(test)]
mod tests {
    use super::{
        month_day_list, month_list, occurrence_list, week_number_list, weekday_list,
        weekday_num_list,
    };
    use crate::rfc::recur::core::{Clause, Weekday};

    #[test]
    fn month_list_basic() {
        assert_eq!(month_list("1,6,12").unwrap(), vec![1, 6, 12]);
    }

    #[test]
    fn month_list_empty_is_omitted() {
        assert!(month_list("").unwrap().is_empty());
    }

    #[test]
    fn month_list_rejects_out_of_range() {
        let rejection = month_list("13").unwrap_err();
        assert_eq!(rejection.clause, Clause::Month);
    }

    #[test]
    fn month_list_rejects_non_integer() {
        let rejection = month_list("1,x").unwrap_err();
        assert_eq!(rejection.clause, Clause::Month);
        assert!(rejection.reason.contains("not an integer"));
    }

    #[test]
    fn month_list_overflow_is_out_of_range() {
        let rejection = month_list("99999").unwrap_err();
        assert_eq!(rejection.clause, Clause::Month);
        assert!(rejection.reason.contains("out of range"));
    }

    #[test]
    fn month_day_list_accepts_bounds() {
        assert_eq!(month_day_list("1,31").unwrap(), vec![1, 31]);
        assert!(month_day_list("32").is_err());
        assert!(month_day_list("0").is_err());
    }

    #[test]
    fn week_number_list_accepts_negative() {
        assert_eq!(week_number_list("-53,20").unwrap(), vec![-53, 20]);
    }

    #[test]
    fn week_number_list_rejects_zero() {
        let rejection = week_number_list("0").unwrap_err();
        assert_eq!(rejection.clause, Clause::WeekNo);
    }

    #[test]
    fn occurrence_list_names_the_caller_clause() {
        let rejection = occurrence_list("367", Clause::YearDay).unwrap_err();
        assert_eq!(rejection.clause, Clause::YearDay);

        let rejection = occurrence_list("0", Clause::SetPos).unwrap_err();
        assert_eq!(rejection.clause, Clause::SetPos);
    }

    #[test]
    fn weekday_list_basic() {
        assert_eq!(
            weekday_list("MO,TU").unwrap(),
            vec![Weekday::Monday, Weekday::Tuesday]
        );
    }

    #[test]
    fn weekday_list_rejects_ordinals() {
        let rejection = weekday_list("2FR").unwrap_err();
        assert_eq!(rejection.clause, Clause::Day);
    }

    #[test]
    fn weekday_num_list_plain_and_ordinal() {
        let days = weekday_num_list("MO,2FR,-1SU").unwrap();
        assert_eq!(days[0].ordinal, None);
        assert_eq!(days[1].ordinal, Some(2));
        assert_eq!(days[1].weekday, Weekday::Friday);
        assert_eq!(days[2].ordinal, Some(-1));
    }

    #[test]
    fn weekday_num_list_accepts_explicit_plus() {
        let days = weekday_num_list("+2FR").unwrap();
        assert_eq!(days[0].ordinal, Some(2));
    }

    #[test]
    fn weekday_num_list_rejects_zero_ordinal() {
        assert!(weekday_num_list("0MO").is_err());
    }

    #[test]
    fn weekday_num_list_rejects_large_ordinal() {
        assert!(weekday_num_list("54MO").is_err());
    }

    #[test]
    fn weekday_num_list_rejects_bare_sign() {
        assert!(weekday_num_list("+MO").is_err());
    }

    #[test]
    fn weekday_num_list_rejects_unknown_code() {
        assert!(weekday_num_list("2XX").is_err());
    }

    #[test]
    fn weekday_num_list_rejects_multibyte_token() {
        // "éO" is three bytes, so the code split lands inside 'é'.
        assert!(weekday_num_list("éO").is_err());
        assert!(weekday_num_list("2éR").is_err());
    }
}
