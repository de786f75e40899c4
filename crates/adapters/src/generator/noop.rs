// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op generator for when no model is configured.

use super::{GeneratorAdapter, GeneratorError};
use async_trait::async_trait;
use ct_core::Candidate;

pub const DISABLED_MESSAGE: &str = "expression generation is disabled";

/// Generator that never proposes an expression.
///
/// Every question is answered with an advisory error, so callers take the
/// same path as when a model declines a request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpGenerator;

impl NoOpGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GeneratorAdapter for NoOpGenerator {
    async fn generate(&self, _question: &str) -> Result<Candidate, GeneratorError> {
        Ok(Candidate::default().with_advisory(DISABLED_MESSAGE))
    }
}
