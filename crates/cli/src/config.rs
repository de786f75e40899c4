// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-driven settings

use crate::error::CtError;
use ct_adapters::AnthropicConfig;
use ct_engine::DEFAULT_RUN_COUNT;

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const MODEL_VAR: &str = "ANTHROPIC_MODEL";
pub const API_URL_VAR: &str = "CT_API_URL";
pub const RUN_COUNT_VAR: &str = "CT_RUN_COUNT";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub run_count: usize,
}

impl Config {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, CtError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CtError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let run_count = match get(RUN_COUNT_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CtError::invalid_env(RUN_COUNT_VAR, &raw, "a non-negative integer")
            })?,
            None => DEFAULT_RUN_COUNT,
        };

        Ok(Self {
            api_key: get(API_KEY_VAR),
            model: get(MODEL_VAR),
            api_url: get(API_URL_VAR),
            run_count,
        })
    }

    /// Messages API settings, failing on the first missing variable
    pub fn anthropic(&self) -> Result<AnthropicConfig, CtError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CtError::missing_env(API_KEY_VAR))?;
        let model = self
            .model
            .as_deref()
            .ok_or_else(|| CtError::missing_env(MODEL_VAR))?;

        let config = AnthropicConfig::new(api_key, model);
        Ok(match &self.api_url {
            Some(url) => config.with_api_url(url),
            None => config,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
