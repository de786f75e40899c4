// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake schedule adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ScheduleAdapter, ScheduleError};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Recorded schedule request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCall {
    pub expression: String,
    pub after: DateTime<Utc>,
    pub count: usize,
}

/// Fake schedule adapter: hourly run times after the requested instant
#[derive(Clone, Default)]
pub struct FakeScheduleAdapter {
    calls: Arc<Mutex<Vec<ScheduleCall>>>,
    failing: bool,
}

impl FakeScheduleAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter that rejects every expression
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Get all recorded requests
    pub fn calls(&self) -> Vec<ScheduleCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ScheduleAdapter for FakeScheduleAdapter {
    fn upcoming(
        &self,
        expression: &str,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, ScheduleError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ScheduleCall {
                expression: expression.to_string(),
                after,
                count,
            });

        if self.failing {
            return Err(ScheduleError::InvalidExpression(expression.to_string()));
        }

        Ok((1..=count as i64)
            .map(|hours| after + Duration::hours(hours))
            .collect())
    }
}
