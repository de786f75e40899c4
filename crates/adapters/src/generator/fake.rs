// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake generator for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{GeneratorAdapter, GeneratorError};
use async_trait::async_trait;
use ct_core::Candidate;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Fake generator that replays scripted responses in order
#[derive(Clone, Default)]
pub struct FakeGenerator {
    responses: Arc<Mutex<VecDeque<Result<Candidate, GeneratorError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose next answer proposes `expression`
    pub fn proposing(expression: &str) -> Self {
        let fake = Self::new();
        fake.push(Ok(Candidate::new(expression)));
        fake
    }

    /// Queue a response
    pub fn push(&self, response: Result<Candidate, GeneratorError>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Get all questions received
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl GeneratorAdapter for FakeGenerator {
    async fn generate(&self, question: &str) -> Result<Candidate, GeneratorError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(question.to_string());

        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(GeneratorError::Request("no scripted response".to_string())))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
