// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ct next` - Upcoming run times for an expression

use crate::config::Config;
use crate::error::CtError;
use crate::output::{print, OutputFormat};
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;
use ct_adapters::{CronScheduleAdapter, ScheduleAdapter, TracedScheduleAdapter};
use ct_core::{validate_expression, CronResponse};

#[derive(Args)]
pub struct NextArgs {
    /// Five-field expression, quoted as one argument
    pub expression: String,

    /// Number of run times to list [default: CT_RUN_COUNT or 5]
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    /// Start from this instant instead of now (RFC 3339)
    #[arg(long)]
    pub after: Option<String>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn next(args: NextArgs, config: &Config) -> Result<()> {
    let after = match &args.after {
        Some(raw) => parse_after(raw)?,
        None => Utc::now(),
    };
    let count = args.count.unwrap_or(config.run_count);
    tracing::debug!(expression = %args.expression, %after, count, "listing run times");

    let response = upcoming(
        &TracedScheduleAdapter::new(CronScheduleAdapter::new()),
        &args.expression,
        after,
        count,
    )?;
    print(&response, args.output);
    Ok(())
}

/// Validate `expression` and list its run times after `after`
pub fn upcoming<S: ScheduleAdapter>(
    schedule: &S,
    expression: &str,
    after: DateTime<Utc>,
    count: usize,
) -> Result<CronResponse> {
    let parsed = validate_expression(expression)?;
    let expression = parsed.to_string();

    let times = schedule.upcoming(&expression, after, count)?;
    let next_run_times = times
        .iter()
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .collect();

    Ok(CronResponse::scheduled(expression, next_run_times))
}

fn parse_after(raw: &str) -> Result<DateTime<Utc>, CtError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            CtError::new(format!("invalid --after timestamp '{}'", raw))
                .with_context(e.to_string())
                .with_suggestion("use RFC 3339, for example 2026-01-19T10:30:00Z")
        })
}

#[cfg(test)]
#[path = "next_tests.rs"]
mod tests;
