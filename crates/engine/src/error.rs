// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the request flow

use ct_adapters::GeneratorError;
use thiserror::Error;

/// Errors that stop a request before any response can be built.
///
/// Rejected or unschedulable expressions are not errors; they are reported
/// inside the response.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("error processing cron question: {0}")]
    Generator(#[from] GeneratorError),
}
