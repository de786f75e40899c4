// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-time calculation adapters

mod calendar;

pub use calendar::CronScheduleAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeScheduleAdapter, ScheduleCall};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from schedule calculation
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid cron expression: {0}")]
    InvalidExpression(String),
    #[error("no upcoming run times for: {0}")]
    Exhausted(String),
}

/// Adapter that expands a validated expression into concrete run times
pub trait ScheduleAdapter: Clone + Send + Sync + 'static {
    /// The next `count` run times strictly after `after`
    fn upcoming(
        &self,
        expression: &str,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, ScheduleError>;
}
