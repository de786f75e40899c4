// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ct-core: cron expression validation for crontalk
//!
//! This crate provides:
//! - A field splitter turning raw text into a five-field [`Expression`]
//! - Static per-field bounds and symbolic names ([`FieldSpec`])
//! - The field grammar: wildcards, steps, ranges, lists, names, and the
//!   special tokens `?`, `L`, `W` and `#`
//! - The data contracts exchanged with the expression generator and the
//!   schedule calculator

pub mod candidate;
pub mod error;
pub mod expression;
pub mod field;
pub mod validator;

pub use candidate::{Candidate, CronResponse};
pub use error::{Reason, Scope, ValidationError};
pub use expression::Expression;
pub use field::{Field, FieldSpec, FIELD_SPECS};
pub use validator::{validate, validate_expression, validate_field};
