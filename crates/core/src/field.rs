// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field descriptors for five-field cron expressions
//!
//! Every field is validated by the same routine; what differs between them
//! is captured here as data: inclusive numeric bounds, the symbolic names a
//! field accepts, and which special tokens are meaningful for it.

use serde::Serialize;
use std::fmt;

/// One positional component of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// All fields, in positional (and validation) order
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Name used when reporting errors
    pub fn name(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }

    /// Static descriptor for this field
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    /// `?` (no specific value) is only meaningful for the day fields
    pub fn accepts_unspecified(self) -> bool {
        matches!(self, Field::DayOfMonth | Field::DayOfWeek)
    }

    /// `L` (last day of month, or last weekday)
    pub fn accepts_last(self) -> bool {
        matches!(self, Field::DayOfMonth | Field::DayOfWeek)
    }

    /// `<day>W` (nearest weekday to a day of the month)
    pub fn accepts_nearest_weekday(self) -> bool {
        self == Field::DayOfMonth
    }

    /// `<weekday>#<n>` (nth weekday of the month)
    pub fn accepts_nth_weekday(self) -> bool {
        self == Field::DayOfWeek
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bounds and symbolic names for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Symbolic names; a name's position in the list maps to a value
    pub names: &'static [&'static str],
}

const MONTH_NAMES: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_NAMES: &[&str] = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Descriptors for every field, indexed by `Field as usize`.
///
/// Day of month starts at 0 rather than 1, so a bare `0` is accepted there.
pub const FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        field: Field::Minute,
        min: 0,
        max: 59,
        names: &[],
    },
    FieldSpec {
        field: Field::Hour,
        min: 0,
        max: 23,
        names: &[],
    },
    FieldSpec {
        field: Field::DayOfMonth,
        min: 0,
        max: 31,
        names: &[],
    },
    FieldSpec {
        field: Field::Month,
        min: 1,
        max: 12,
        names: MONTH_NAMES,
    },
    FieldSpec {
        field: Field::DayOfWeek,
        min: 0,
        max: 7,
        names: WEEKDAY_NAMES,
    },
];

impl FieldSpec {
    /// Check whether a value lies within `[min, max]`
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Zero-based position of a symbolic name, ignoring case.
    ///
    /// Uses Unicode simple case folding, which for ASCII names adds the long
    /// s (`ſ`) and the Kelvin sign to the usual ASCII pairs.
    pub fn find_name(&self, value: &str) -> Option<usize> {
        self.names.iter().position(|name| {
            name.chars().count() == value.chars().count()
                && name
                    .chars()
                    .zip(value.chars())
                    .all(|(a, b)| fold(a) == fold(b))
        })
    }
}

/// Simple case fold, exact for characters that fold onto ASCII letters
fn fold(c: char) -> char {
    match c {
        '\u{017F}' => 's',
        '\u{212A}' => 'k',
        _ => c.to_ascii_lowercase(),
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
