// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;

/// Variables `ct` reads; cleared so the host environment cannot leak in.
const ENV_VARS: &[&str] = &[
    "ANTHROPIC_API_KEY",
    "ANTHROPIC_MODEL",
    "CT_API_URL",
    "CT_RUN_COUNT",
    "RUST_LOG",
];

/// The `ct` binary with a clean environment
pub fn ct() -> Command {
    let mut cmd = Command::cargo_bin("ct").expect("ct binary should be built");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Fixed starting instant for schedule output
pub const AFTER: &str = "2026-01-19T10:30:00Z";
