// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the collaborators around validation: the generator that
//! proposes expressions and the calculator that expands them into run times

pub mod generator;
pub mod schedule;
pub mod traced;

pub use generator::{
    AnthropicConfig, AnthropicGenerator, GeneratorAdapter, GeneratorError, NoOpGenerator,
    DEFAULT_API_URL,
};
pub use schedule::{CronScheduleAdapter, ScheduleAdapter, ScheduleError};
pub use traced::{TracedGenerator, TracedScheduleAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use generator::FakeGenerator;
#[cfg(any(test, feature = "test-support"))]
pub use schedule::{FakeScheduleAdapter, ScheduleCall};
