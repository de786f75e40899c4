// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run times computed by the `cron` crate

use super::{ScheduleAdapter, ScheduleError};
use chrono::{DateTime, Utc};
use cron::Schedule;
use ct_core::{Expression, Field};
use std::str::FromStr;

/// Schedule adapter backed by the `cron` crate.
///
/// The crate reads seven fields (seconds first, year last) and numbers
/// weekdays 1-7 from Sunday, so five-field expressions are rewritten before
/// parsing. Validated expressions using `L`, `W` or `#` are passed through
/// and reported as [`ScheduleError::InvalidExpression`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CronScheduleAdapter;

impl CronScheduleAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// Widen a five-field expression to the crate's seven-field form
fn to_cron_crate_format(expression: &str) -> String {
    match Expression::parse(expression) {
        Ok(e) => format!(
            "0 {} {} {} {} {} *",
            e.minute,
            e.hour,
            e.day_of_month,
            months_to_numbers(&e.month),
            weekdays_to_crate(&e.day_of_week)
        ),
        Err(_) => expression.to_string(),
    }
}

/// Month names become their numbers; numbers already match.
fn months_to_numbers(field: &str) -> String {
    let spec = Field::Month.spec();
    map_elements(field, |element| {
        let (start, end) = split_range(element);
        let number = |v: &str| match spec.find_name(v) {
            Some(index) => (index + 1).to_string(),
            None => v.to_string(),
        };
        match end {
            Some(end) => format!("{}-{}", number(start), number(end)),
            None => number(start),
        }
    })
}

/// Rewrite weekdays from 0-7 (0 and 7 are Sunday) to the crate's 1-7
/// (1 is Sunday). Names become numbers, tokens this cannot read stay as is.
fn weekdays_to_crate(field: &str) -> String {
    let spec = Field::DayOfWeek.spec();
    let weekday = |v: &str| -> Option<i64> {
        match spec.find_name(v) {
            Some(index) => Some(index as i64),
            None => v.parse::<i64>().ok().filter(|n| spec.contains(*n)),
        }
    };
    let shift = |n: i64| n % 7 + 1;

    map_elements(field, |element| {
        let (start, end) = split_range(element);
        match (weekday(start), end.map(weekday)) {
            (Some(n), None) => shift(n).to_string(),
            // A range ending on 7 wraps from Saturday back to Sunday.
            (Some(0), Some(Some(7))) => "1-7".to_string(),
            (Some(7), Some(Some(7))) => "1".to_string(),
            (Some(6), Some(Some(7))) => "7,1".to_string(),
            (Some(a), Some(Some(7))) => format!("{}-7,1", shift(a)),
            (Some(a), Some(Some(b))) => format!("{}-{}", shift(a), shift(b)),
            _ => element.to_string(),
        }
    })
}

fn map_elements(field: &str, f: impl Fn(&str) -> String) -> String {
    field.split(',').map(f).collect::<Vec<_>>().join(",")
}

/// Split `a-b` into its endpoints. Steps and signed numbers are not ranges.
fn split_range(element: &str) -> (&str, Option<&str>) {
    if element.contains('/') {
        return (element, None);
    }
    match element.split_once('-') {
        Some((start, end)) if !start.is_empty() => (start, Some(end)),
        _ => (element, None),
    }
}

impl ScheduleAdapter for CronScheduleAdapter {
    fn upcoming(
        &self,
        expression: &str,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, ScheduleError> {
        let schedule = Schedule::from_str(&to_cron_crate_format(expression))
            .map_err(|e| ScheduleError::InvalidExpression(e.to_string()))?;

        let times: Vec<DateTime<Utc>> = schedule.after(&after).take(count).collect();
        if times.is_empty() && count > 0 {
            return Err(ScheduleError::Exhausted(expression.to_string()));
        }
        Ok(times)
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
