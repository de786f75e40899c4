// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expression generation adapters

mod anthropic;
mod noop;

pub use anthropic::{AnthropicConfig, AnthropicGenerator, DEFAULT_API_URL};
pub use noop::NoOpGenerator;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeGenerator;

use async_trait::async_trait;
use ct_core::Candidate;
use thiserror::Error;

/// Errors from generator operations
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("empty response content")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Adapter that turns a free-form question into a candidate expression
#[async_trait]
pub trait GeneratorAdapter: Clone + Send + Sync + 'static {
    /// Propose an expression, or explain why none fits
    async fn generate(&self, question: &str) -> Result<Candidate, GeneratorError>;
}
