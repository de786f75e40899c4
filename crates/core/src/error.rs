// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation errors
//!
//! Structural failures (wrong field count) and field failures share one
//! shape: the name of what was wrong and a message saying why.

use crate::field::Field;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Why a value was rejected. The display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("must have 5 fields")]
    FieldCount,
    #[error("invalid value")]
    InvalidValue,
    #[error("must start with a '*'")]
    StepBase,
    #[error("value after '/' must be a number")]
    StepNotNumber,
    #[error("incomplete range")]
    IncompleteRange,
    #[error("invalid range start")]
    InvalidRangeStart,
    #[error("invalid range end")]
    InvalidRangeEnd,
    #[error("invalid range")]
    InvalidRange,
    #[error("invalid value in list")]
    InvalidList,
    #[error("invalid weekday value")]
    InvalidNearestWeekday,
    #[error("invalid nth weekday of month")]
    InvalidNthWeekday,
    #[error("value must be between {min} and {max}")]
    OutOfBounds { min: i64, max: i64 },
}

/// What an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The expression as a whole
    Expression,
    /// A single field
    Field(Field),
}

impl Scope {
    pub fn name(self) -> &'static str {
        match self {
            Scope::Expression => "expression",
            Scope::Field(field) => field.name(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A failed validation: the offending field and the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cron validation error in {scope}: {reason}")]
pub struct ValidationError {
    pub scope: Scope,
    pub reason: Reason,
}

impl ValidationError {
    pub fn expression(reason: Reason) -> Self {
        Self {
            scope: Scope::Expression,
            reason,
        }
    }

    pub fn field(field: Field, reason: Reason) -> Self {
        Self {
            scope: Scope::Field(field),
            reason,
        }
    }

    /// Display name of the offending field (`"expression"` for structural errors)
    pub fn field_name(&self) -> &'static str {
        self.scope.name()
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("field", self.field_name())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
