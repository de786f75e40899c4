// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! crontalk request flow: question → candidate → validation → run times

mod error;
mod flow;

pub use error::EngineError;
pub use flow::{Engine, EngineConfig, DEFAULT_RUN_COUNT, INVALID_GENERATED_PREFIX};
