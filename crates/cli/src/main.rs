// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ct - cron expression checker

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ask, next, validate};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "ct",
    version,
    about = "crontalk - validate cron expressions and preview their schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check five-field cron expressions
    Validate(validate::ValidateArgs),
    /// List upcoming run times for an expression
    Next(next::NextArgs),
    /// Ask for a schedule in plain language
    Ask(ask::AskArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Validate(args) => validate::validate_cmd(args),
        Commands::Next(args) => next::next(args, &Config::from_env()?),
        Commands::Ask(args) => ask::ask(args, &Config::from_env()?).await,
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Log to stderr so stdout stays machine-readable
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
