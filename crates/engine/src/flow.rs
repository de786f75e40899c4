// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning a scheduling question into a validated expression and run times

use crate::error::EngineError;
use chrono::{DateTime, SecondsFormat, Utc};
use ct_adapters::{GeneratorAdapter, ScheduleAdapter};
use ct_core::{validate, Candidate, CronResponse};

/// Run times returned when none are requested explicitly
pub const DEFAULT_RUN_COUNT: usize = 5;

/// Prefix of the message returned when the generator proposes an invalid expression
pub const INVALID_GENERATED_PREFIX: &str = ":( Invalid cron expression generated: ";

/// Engine settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How many upcoming run times to include in a response
    pub run_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            run_count: DEFAULT_RUN_COUNT,
        }
    }
}

/// Composes the generator, the validator and the schedule calculator
pub struct Engine<G, S> {
    generator: G,
    schedule: S,
    config: EngineConfig,
}

impl<G, S> Engine<G, S>
where
    G: GeneratorAdapter,
    S: ScheduleAdapter,
{
    pub fn new(generator: G, schedule: S, config: EngineConfig) -> Self {
        Self {
            generator,
            schedule,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Answer a free-form question
    pub async fn handle(&self, question: &str) -> Result<CronResponse, EngineError> {
        let candidate = self.generator.generate(question).await?;
        Ok(self.resolve(&candidate))
    }

    /// Check a candidate and expand it into run times after now
    pub fn resolve(&self, candidate: &Candidate) -> CronResponse {
        self.resolve_at(candidate, Utc::now())
    }

    /// Check a candidate and expand it into run times after `after`.
    ///
    /// The generator's own error wins over validation. A valid expression is
    /// always returned, even when its run times cannot be computed.
    pub fn resolve_at(&self, candidate: &Candidate, after: DateTime<Utc>) -> CronResponse {
        if let Some(advisory) = candidate.advisory() {
            tracing::info!(advisory, "generator declined");
            return CronResponse::rejected(advisory);
        }

        let expression = candidate.expression.as_str();
        if let Err(e) = validate(expression) {
            tracing::warn!(expression, error = %e, "generated expression is invalid");
            return CronResponse::rejected(format!("{}{}", INVALID_GENERATED_PREFIX, expression));
        }

        let next_run_times = match self
            .schedule
            .upcoming(expression, after, self.config.run_count)
        {
            Ok(times) => times
                .iter()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .collect(),
            Err(e) => {
                tracing::warn!(expression, error = %e, "failed to calculate next run times");
                Vec::new()
            }
        };

        CronResponse::scheduled(expression, next_run_times)
    }
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
