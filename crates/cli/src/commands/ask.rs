// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ct ask` - Turn a plain-language request into a schedule

use crate::config::Config;
use crate::error::CtError;
use crate::output::{print, OutputFormat};
use anyhow::Result;
use clap::Args;
use ct_adapters::{
    AnthropicGenerator, CronScheduleAdapter, GeneratorAdapter, ScheduleAdapter, TracedGenerator,
    TracedScheduleAdapter,
};
use ct_core::CronResponse;
use ct_engine::{Engine, EngineConfig};

#[derive(Args)]
pub struct AskArgs {
    /// The request, e.g. "every weekday at 5am"
    #[arg(required = true, trailing_var_arg = true)]
    pub question: Vec<String>,

    /// Number of run times to list [default: CT_RUN_COUNT or 5]
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub async fn ask(args: AskArgs, config: &Config) -> Result<()> {
    let engine = Engine::new(
        TracedGenerator::new(AnthropicGenerator::new(config.anthropic()?)),
        TracedScheduleAdapter::new(CronScheduleAdapter::new()),
        EngineConfig {
            run_count: args.count.unwrap_or(config.run_count),
        },
    );

    let question = args.question.join(" ");
    let response = answer(&engine, &question).await?;
    print(&response, args.output);

    if response.is_rejected() {
        return Err(CtError::no_schedule(&question).into());
    }
    Ok(())
}

/// Run `question` through the engine, refusing blank input
pub async fn answer<G, S>(engine: &Engine<G, S>, question: &str) -> Result<CronResponse>
where
    G: GeneratorAdapter,
    S: ScheduleAdapter,
{
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("question must not be empty");
    }
    Ok(engine.handle(question).await?)
}

#[cfg(test)]
#[path = "ask_tests.rs"]
mod tests;
