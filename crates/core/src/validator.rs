// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field grammar and expression validation.
//!
//! A field value is matched against these forms in order; the first form
//! that applies decides the outcome:
//! 1. `*` wildcard
//! 2. `*/n` step (only from the wildcard; `n` is then checked like a plain value)
//! 3. `a-b` range
//! 4. `a,b,c` list, each element validated recursively
//! 5. `?` (day fields)
//! 6. `L` (day fields)
//! 7. `<day>W` (day of month)
//! 8. `<weekday>#<n>` (day of week)
//! 9. plain integer within the field's bounds
//! 10. symbolic name (month or weekday), case-insensitive
//!
//! Fields never influence each other: day 31 in February is accepted.

use crate::error::{Reason, ValidationError};
use crate::expression::Expression;
use crate::field::FieldSpec;
use std::ops::RangeInclusive;

/// Days accepted before a `W` suffix. Deliberately not the field's bounds.
const NEAREST_WEEKDAY_DAYS: RangeInclusive<i64> = 1..=31;

/// Weekdays accepted before `#`
const NTH_WEEKDAYS: RangeInclusive<i64> = 1..=7;

/// Occurrences accepted after `#`
const NTH_OCCURRENCES: RangeInclusive<i64> = 1..=5;

/// Validate a raw expression
pub fn validate(expression: &str) -> Result<(), ValidationError> {
    validate_expression(expression).map(|_| ())
}

/// Split and validate a raw expression, returning its fields on success
pub fn validate_expression(expression: &str) -> Result<Expression, ValidationError> {
    let expr = Expression::parse(expression).inspect_err(|e| {
        tracing::debug!(expression, error = %e, "rejected");
    })?;
    expr.validate()?;
    Ok(expr)
}

impl Expression {
    /// Validate each field in order, stopping at the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.fields() {
            if let Err(reason) = validate_field(field.spec(), value) {
                tracing::debug!(field = field.name(), value, %reason, "rejected");
                return Err(ValidationError::field(field, reason));
            }
        }

        tracing::trace!(expression = %self, "valid");
        Ok(())
    }
}

/// Validate a single field value against its spec
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), Reason> {
    if value == "*" {
        return Ok(());
    }

    let mut value = value;
    if value.contains('/') {
        value = step_count(value)?;
    }

    if value.contains('-') {
        return validate_range(spec, value);
    }

    if value.contains(',') {
        return validate_list(spec, value);
    }

    let field = spec.field;

    if value == "?" && field.accepts_unspecified() {
        return Ok(());
    }

    if value == "L" && field.accepts_last() {
        return Ok(());
    }

    if field.accepts_nearest_weekday() {
        if let Some(day) = value.strip_suffix('W') {
            return validate_nearest_weekday(day);
        }
    }

    if field.accepts_nth_weekday() && value.contains('#') {
        return validate_nth_weekday(value);
    }

    if let Some(number) = parse_int(value) {
        return validate_number(spec, number);
    }

    match spec.find_name(value) {
        Some(_) => Ok(()),
        None => Err(Reason::InvalidValue),
    }
}

/// Check `*/n` and return `n`, which is then validated like any other value
fn step_count(value: &str) -> Result<&str, Reason> {
    let parts: Vec<&str> = value.split('/').collect();
    let [base, count] = parts.as_slice() else {
        return Err(Reason::InvalidValue);
    };
    if *base != "*" {
        return Err(Reason::StepBase);
    }
    if parse_int(count).is_none() {
        return Err(Reason::StepNotNumber);
    }
    Ok(count)
}

fn validate_range(spec: &FieldSpec, value: &str) -> Result<(), Reason> {
    let parts: Vec<&str> = value.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(Reason::IncompleteRange);
    };

    let start = range_endpoint(spec, start).ok_or(Reason::InvalidRangeStart)?;
    let end = range_endpoint(spec, end).ok_or(Reason::InvalidRangeEnd)?;

    if !spec.contains(start) || !spec.contains(end) || end < start {
        return Err(Reason::InvalidRange);
    }
    Ok(())
}

/// Resolve a range endpoint: an integer, or a name mapped to its 1-based position
fn range_endpoint(spec: &FieldSpec, part: &str) -> Option<i64> {
    if let Some(number) = parse_int(part) {
        return Some(number);
    }
    spec.find_name(part).map(|index| index as i64 + 1)
}

fn validate_list(spec: &FieldSpec, value: &str) -> Result<(), Reason> {
    for element in value.split(',') {
        if let Err(reason) = validate_field(spec, element) {
            tracing::trace!(element, %reason, "list element rejected");
            return Err(Reason::InvalidList);
        }
    }
    Ok(())
}

fn validate_nearest_weekday(day: &str) -> Result<(), Reason> {
    match parse_int(day) {
        Some(day) if NEAREST_WEEKDAY_DAYS.contains(&day) => Ok(()),
        _ => Err(Reason::InvalidNearestWeekday),
    }
}

fn validate_nth_weekday(value: &str) -> Result<(), Reason> {
    let parts: Vec<&str> = value.split('#').collect();
    let [weekday, nth] = parts.as_slice() else {
        return Err(Reason::InvalidNthWeekday);
    };

    match (parse_int(weekday), parse_int(nth)) {
        (Some(weekday), Some(nth))
            if NTH_WEEKDAYS.contains(&weekday) && NTH_OCCURRENCES.contains(&nth) =>
        {
            Ok(())
        }
        _ => Err(Reason::InvalidNthWeekday),
    }
}

fn validate_number(spec: &FieldSpec, number: i64) -> Result<(), Reason> {
    if spec.contains(number) {
        Ok(())
    } else {
        Err(Reason::OutOfBounds {
            min: spec.min,
            max: spec.max,
        })
    }
}

/// Signed decimal integer; an optional leading `+` or `-` is accepted
fn parse_int(value: &str) -> Option<i64> {
    value.parse().ok()
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
