// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting raw text into the five positional fields

use crate::error::{Reason, ValidationError};
use crate::field::Field;
use std::fmt;
use std::str::FromStr;

/// A cron expression split into its five raw fields.
///
/// Splitting does not check field contents; see [`Expression::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl Expression {
    /// Split on runs of whitespace; exactly five fields are required
    pub fn parse(expression: &str) -> Result<Self, ValidationError> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week] = fields.as_slice() else {
            return Err(ValidationError::expression(Reason::FieldCount));
        };

        Ok(Self {
            minute: minute.to_string(),
            hour: hour.to_string(),
            day_of_month: day_of_month.to_string(),
            month: month.to_string(),
            day_of_week: day_of_week.to_string(),
        })
    }

    /// Raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    /// Fields paired with their values, in positional order
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl FromStr for Expression {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
