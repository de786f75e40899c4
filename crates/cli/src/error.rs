// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CtError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CtError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for CtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                write!(f, "\n  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            write!(f, "\nsuggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CtError {}

/// Common error builders for typical failure scenarios.
impl CtError {
    /// A required environment variable is unset or empty.
    pub fn missing_env(var: &str) -> Self {
        CtError::new(format!("{} is not set", var))
            .with_context("`ct ask` sends your question to a hosted model")
            .with_suggestion(format!("export {}=...", var))
            .with_suggestion("Check an expression you already have: ct validate \"0 5 * * 1-5\"")
    }

    /// An environment variable holds a value that cannot be used.
    pub fn invalid_env(var: &str, value: &str, expected: &str) -> Self {
        CtError::new(format!("{} has an invalid value '{}'", var, value))
            .with_context(format!("expected {}", expected))
            .with_suggestion(format!("unset {} to use the default", var))
    }

    /// The generator did not produce a usable schedule.
    pub fn no_schedule(question: &str) -> Self {
        CtError::new("no schedule produced")
            .with_context(format!("question: {}", question))
            .with_suggestion("Rephrase the request with an explicit time and frequency")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
