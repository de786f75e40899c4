// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ct validate` - Check expressions without scheduling them

use crate::output::{print_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use ct_core::{validate, ValidationError};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ValidateArgs {
    /// Expressions to check, each quoted as one argument
    #[arg(required = true)]
    pub expressions: Vec<String>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Outcome for a single expression
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub expression: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl ValidationReport {
    pub fn check(expression: &str) -> Self {
        let error = validate(expression).err();
        Self {
            expression: expression.to_string(),
            valid: error.is_none(),
            error,
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "ok: {}", self.expression),
            Some(e) => write!(
                f,
                "invalid: {}: {}: {}",
                self.expression,
                e.field_name(),
                e.message()
            ),
        }
    }
}

pub fn validate_cmd(args: ValidateArgs) -> Result<()> {
    let reports: Vec<ValidationReport> = args
        .expressions
        .iter()
        .map(|e| ValidationReport::check(e))
        .collect();

    print_list(&reports, args.output);

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        anyhow::bail!("{} of {} expressions are invalid", invalid, reports.len());
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
