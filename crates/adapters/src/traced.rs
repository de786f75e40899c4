// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::generator::{GeneratorAdapter, GeneratorError};
use crate::schedule::{ScheduleAdapter, ScheduleError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ct_core::Candidate;
use tracing::Instrument;

/// Wrapper that adds tracing to any GeneratorAdapter
#[derive(Clone)]
pub struct TracedGenerator<G> {
    inner: G,
}

impl<G> TracedGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<G: GeneratorAdapter> GeneratorAdapter for TracedGenerator<G> {
    async fn generate(&self, question: &str) -> Result<Candidate, GeneratorError> {
        let span = tracing::info_span!("generator.generate", question_len = question.len());

        // Entered guards are not Send; the span wraps the future instead
        async move {
            tracing::debug!(question, "requesting");

            let start = std::time::Instant::now();
            let result = self.inner.generate(question).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(candidate) => tracing::info!(
                    expression = %candidate.expression,
                    advisory = candidate.advisory().unwrap_or(""),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "candidate received"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "generation failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any ScheduleAdapter
#[derive(Clone)]
pub struct TracedScheduleAdapter<S> {
    inner: S,
}

impl<S> TracedScheduleAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: ScheduleAdapter> ScheduleAdapter for TracedScheduleAdapter<S> {
    fn upcoming(
        &self,
        expression: &str,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, ScheduleError> {
        let span = tracing::debug_span!("schedule.upcoming", expression, count);
        let _guard = span.enter();

        let result = self.inner.upcoming(expression, after, count);

        match &result {
            Ok(times) => tracing::debug!(
                found = times.len(),
                first = ?times.first(),
                "computed"
            ),
            Err(e) => tracing::warn!(error = %e, "schedule failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
