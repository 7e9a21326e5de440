//! The per-frequency validation and emission cascade.
//!
//! Frequencies form a layered hierarchy: YEARLY admits the most rule parts
//! and WEEKLY the fewest, with the middle tiers sharing the month-scope
//! checks. The sharing is structural: one match arm per frequency, each arm
//! calling the clause validators it needs. Validation order decides which
//! clause a rejection names; emission order is fixed separately so output is
//! stable for identical input.

use std::fmt::Display;

use crate::rfc::recur::core::{Clause, EncodeResult, Frequency, RecurrenceSpec, WeekdayNum};
use crate::rfc::recur::parse;

/// Encodes a recurrence spec into an RFC 5545 RECUR value.
///
/// On success the string starts with `FREQ=<frequency>`, followed by the
/// tier's clauses in emission order, then `BYSETPOS` and `UNTIL` when
/// present. Validation stops at the first bad clause and rejects the whole
/// spec; no partially assembled string is ever returned.
///
/// ## Errors
/// Returns a [`RejectedClause`](crate::rfc::recur::core::RejectedClause)
/// naming the first rule part (in validation order) that failed.
#[tracing::instrument(skip(spec), fields(freq = %spec.frequency))]
pub fn encode(spec: &RecurrenceSpec) -> EncodeResult<String> {
    assemble(spec).inspect_err(|rejection| {
        tracing::debug!(clause = %rejection.clause, reason = %rejection.reason, "Rejected recurrence spec");
    })
}

fn assemble(spec: &RecurrenceSpec) -> EncodeResult<String> {
    let mut rule = format!("FREQ={}", spec.frequency);

    match spec.frequency {
        Frequency::Yearly => yearly(spec, &mut rule)?,
        Frequency::Monthly => monthly(spec, &mut rule)?,
        Frequency::Weekly => weekly(spec, &mut rule)?,
        Frequency::Daily => daily(spec, &mut rule)?,
    }

    let set_positions = parse::occurrence_list(&spec.by_set_pos, Clause::SetPos)?;
    push_clause(&mut rule, Clause::SetPos, &set_positions);

    if let Some(until) = spec.until.as_deref()
        && !until.is_empty()
    {
        rule.push_str(";UNTIL=");
        rule.push_str(until);
    }

    Ok(rule)
}

/// YEARLY tier: week numbers and year days on top of the month scope.
///
/// BYDAY switches grammar here: plain weekday codes alongside a BYWEEKNO,
/// ordinal weekdays otherwise.
fn yearly(spec: &RecurrenceSpec, rule: &mut String) -> EncodeResult<()> {
    let week_numbers = parse::week_number_list(&spec.by_week_no)?;
    let year_days = parse::occurrence_list(&spec.by_year_day, Clause::YearDay)?;
    let days = if week_numbers.is_empty() {
        parse::weekday_num_list(&spec.by_day)?
    } else {
        plain_days(&spec.by_day)?
    };
    let (month_days, months) = month_scope(spec)?;

    push_clause(rule, Clause::WeekNo, &week_numbers);
    push_clause(rule, Clause::YearDay, &year_days);
    push_clause(rule, Clause::MonthDay, &month_days);
    push_clause(rule, Clause::Month, &months);
    push_clause(rule, Clause::Day, &days);
    Ok(())
}

/// MONTHLY tier: ordinal weekdays plus the month scope.
fn monthly(spec: &RecurrenceSpec, rule: &mut String) -> EncodeResult<()> {
    let days = parse::weekday_num_list(&spec.by_day)?;
    let (month_days, months) = month_scope(spec)?;

    push_clause(rule, Clause::MonthDay, &month_days);
    push_clause(rule, Clause::Month, &months);
    push_clause(rule, Clause::Day, &days);
    Ok(())
}

/// DAILY tier: like MONTHLY but BYDAY takes plain weekday codes only.
fn daily(spec: &RecurrenceSpec, rule: &mut String) -> EncodeResult<()> {
    let days = plain_days(&spec.by_day)?;
    let (month_days, months) = month_scope(spec)?;

    push_clause(rule, Clause::MonthDay, &month_days);
    push_clause(rule, Clause::Month, &months);
    push_clause(rule, Clause::Day, &days);
    Ok(())
}

/// WEEKLY tier: plain weekday codes and months only. The month-day field is
/// outside this tier and is neither validated nor emitted.
fn weekly(spec: &RecurrenceSpec, rule: &mut String) -> EncodeResult<()> {
    let days = plain_days(&spec.by_day)?;
    let months = parse::month_list(&spec.by_month)?;

    push_clause(rule, Clause::Month, &months);
    push_clause(rule, Clause::Day, &days);
    Ok(())
}

/// The month-scope pair shared by the YEARLY, MONTHLY and DAILY tiers:
/// `byMonthDay` first, then `byMonth`.
fn month_scope(spec: &RecurrenceSpec) -> EncodeResult<(Vec<i16>, Vec<i16>)> {
    let month_days = parse::month_day_list(&spec.by_month_day)?;
    let months = parse::month_list(&spec.by_month)?;
    Ok((month_days, months))
}

/// Validates a plain-grammar BYDAY field into ordinal-free weekday tokens.
fn plain_days(by_day: &str) -> EncodeResult<Vec<WeekdayNum>> {
    Ok(parse::weekday_list(by_day)?
        .into_iter()
        .map(WeekdayNum::plain)
        .collect())
}

/// Appends `;CLAUSE=v1,v2,...` to the rule; an empty list emits nothing.
fn push_clause<T: Display>(rule: &mut String, clause: Clause, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    rule.push(';');
    rule.push_str(clause.rule_part());
    rule.push('=');
    rule.push_str(&joined);
}
