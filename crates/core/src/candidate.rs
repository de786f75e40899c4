// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data exchanged with the expression generator and returned to callers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed expression from the generator.
///
/// Wire form is `{"cron": "...", "error": "..."}`; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "cron", default)]
    pub expression: String,
    #[serde(rename = "error", default)]
    pub advisory_error: String,
}

impl Candidate {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            advisory_error: String::new(),
        }
    }

    pub fn with_advisory(mut self, error: impl Into<String>) -> Self {
        self.advisory_error = error.into();
        self
    }

    /// The generator's own error, if it reported one.
    ///
    /// Only candidates without an advisory error are validated.
    pub fn advisory(&self) -> Option<&str> {
        if self.advisory_error.is_empty() {
            None
        } else {
            Some(&self.advisory_error)
        }
    }
}

/// Outcome of turning a question into a schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cron_expression: String,
    /// Upcoming run times, RFC 3339
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_run_times: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
}

impl CronResponse {
    pub fn scheduled(expression: impl Into<String>, next_run_times: Vec<String>) -> Self {
        Self {
            cron_expression: expression.into(),
            next_run_times,
            error_message: String::new(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
            ..Self::default()
        }
    }

    pub fn is_rejected(&self) -> bool {
        !self.error_message.is_empty()
    }
}

impl fmt::Display for CronResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rejected() {
            return write!(f, "error: {}", self.error_message);
        }
        write!(f, "{}", self.cron_expression)?;
        for time in &self.next_run_times {
            write!(f, "\n  {}", time)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod tests;
