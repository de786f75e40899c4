// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generator backed by the Anthropic Messages API

use super::{GeneratorAdapter, GeneratorError};
use async_trait::async_trait;
use ct_core::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f64 = 0.25;

/// The assistant turn is pre-filled with `{` so the reply is a JSON object
const PREFILL: &str = "{";

const SYSTEM_PROMPT: &str = r#"You are a cron expression generator. Interpret the user's request and return a five-field cron expression in a specific JSON format. If they ask for anything that isn't a schedule, politely decline.

Format:
* * * * *
| | | | |
| | | | +----- Day of the week (0 - 7) (Sunday is both 0 and 7)
| | | +------- Month (1 - 12)
| | +--------- Day of the month (1 - 31)
| +----------- Hour (0 - 23)
+------------- Minute (0 - 59)

Allowed values:
- Minutes: 0-59
- Hours: 0-23
- Day of month: 1-31
- Month: 1-12 or JAN-DEC
- Day of week: 0-7 or SUN-SAT

Special characters:
* any value
, value list separator
- range of values
/ step values (only after *)
? no specific value (day of month or day of week)
L last day of the month or week
W nearest weekday (day of month)
# nth weekday of the month (day of week)

Respond with a JSON object:
{"cron": "<expression>", "error": "<error message>"}

On success set "cron" and leave "error" empty. If the request cannot be fulfilled, leave "cron" empty and put an educational message of at most 20 words in "error", naming which field is wrong and why, and suggesting alternatives when possible.

Examples:
Request: "Run at midnight every day"
Output: {"cron": "0 0 * * *", "error": ""}

Request: "Execute every 15 minutes"
Output: {"cron": "*/15 * * * *", "error": ""}

Request: "Run at 2:30 PM on weekdays"
Output: {"cron": "30 14 * * 1-5", "error": ""}

Request: "Run on February 30th"
Output: {"cron": "", "error": "February 30th doesn't exist in the calendar. Try using another date"}

Request: "Execute every 75 minutes"
Output: {"cron": "", "error": "Minutes can only be between 0 and 59"}"#;

/// Connection settings for the Messages API
#[derive(Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

impl fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Generator that asks a hosted model for an expression.
///
/// Requests are blocking and run on tokio's blocking pool.
#[derive(Clone, Debug)]
pub struct AnthropicGenerator {
    config: Arc<AnthropicConfig>,
}

impl AnthropicGenerator {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    fn request_body(&self, question: &str) -> Result<String, GeneratorError> {
        let request = MessagesRequest {
            model: &self.config.model,
            system: SYSTEM_PROMPT,
            messages: [
                Message {
                    role: "user",
                    content: question,
                },
                Message {
                    role: "assistant",
                    content: PREFILL,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        serde_json::to_string(&request)
            .map_err(|e| GeneratorError::Request(format!("failed to encode request: {}", e)))
    }

    fn complete(&self, question: &str) -> Result<Candidate, GeneratorError> {
        let body = self.request_body(question)?;

        let mut response = ureq::post(self.config.api_url.as_str())
            .header("content-type", "application/json")
            .header("x-api-key", self.config.api_key.as_str())
            .header("anthropic-version", API_VERSION)
            .send(body.as_str())
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => GeneratorError::Status(status),
                other => GeneratorError::Request(other.to_string()),
            })?;

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| GeneratorError::Request(format!("failed to read response: {}", e)))?;

        parse_completion(&text)
    }
}

#[async_trait]
impl GeneratorAdapter for AnthropicGenerator {
    async fn generate(&self, question: &str) -> Result<Candidate, GeneratorError> {
        let this = self.clone();
        let question = question.to_string();

        tokio::task::spawn_blocking(move || this.complete(&question))
            .await
            .map_err(|e| GeneratorError::Request(format!("request task failed: {}", e)))?
    }
}

/// Extract the candidate from a Messages API response body.
///
/// The model continues after the pre-filled `{`, so the opening brace is
/// restored when missing.
fn parse_completion(body: &str) -> Result<Candidate, GeneratorError> {
    let response: MessagesResponse =
        serde_json::from_str(body).map_err(|e| GeneratorError::Malformed(e.to_string()))?;

    let text = response
        .content
        .into_iter()
        .next()
        .ok_or(GeneratorError::EmptyResponse)?
        .text;

    let json = if text.trim_start().starts_with('{') {
        text
    } else {
        format!("{}{}", PREFILL, text)
    };

    serde_json::from_str(&json).map_err(|e| GeneratorError::Malformed(e.to_string()))
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod tests;
