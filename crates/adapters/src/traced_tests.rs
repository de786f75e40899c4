// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::generator::FakeGenerator;
use crate::schedule::FakeScheduleAdapter;
use chrono::TimeZone;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::new();
    let logs_clone = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs_clone)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn after() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 19, 10, 30, 0).unwrap()
}

// =============================================================================
// Pass-through behaviour
// =============================================================================

#[tokio::test]
async fn traced_generator_passes_through() {
    let fake = FakeGenerator::proposing("0 0 * * *");
    let traced = TracedGenerator::new(fake.clone());

    let candidate = traced.generate("midnight").await.unwrap();

    assert_eq!(candidate.expression, "0 0 * * *");
    assert_eq!(fake.calls(), vec!["midnight"]);
}

#[test]
fn traced_schedule_passes_through() {
    let fake = FakeScheduleAdapter::new();
    let traced = TracedScheduleAdapter::new(fake.clone());

    let times = traced.upcoming("0 * * * *", after(), 3).unwrap();

    assert_eq!(times.len(), 3);
    assert_eq!(fake.calls().len(), 1);
    assert_eq!(fake.calls()[0].expression, "0 * * * *");
}

// =============================================================================
// Tracing output verification tests
// =============================================================================

#[test]
fn traced_generator_logs_span_and_result() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedGenerator::new(FakeGenerator::proposing("*/15 * * * *"));
        traced.generate("every quarter hour").await
    });

    assert!(result.is_ok(), "generate should succeed: {:?}", result);
    assert!(
        logs.contains("generator.generate"),
        "Should log span name. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("candidate received"),
        "Should log completion. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("elapsed_ms"),
        "Should log timing. Logs:\n{}",
        logs
    );
}

#[test]
fn traced_generator_logs_failure() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedGenerator::new(FakeGenerator::new());
        traced.generate("anything").await
    });

    assert!(result.is_err());
    assert!(
        logs.contains("generation failed"),
        "Should log failure. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("no scripted response"),
        "Should include error. Logs:\n{}",
        logs
    );
}

#[test]
fn traced_schedule_logs_failure() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedScheduleAdapter::new(FakeScheduleAdapter::failing());
        traced.upcoming("0 5 L * *", after(), 5)
    });

    assert!(result.is_err());
    assert!(
        logs.contains("schedule.upcoming"),
        "Should log span name. Logs:\n{}",
        logs
    );
    assert!(
        logs.contains("schedule failed"),
        "Should log failure. Logs:\n{}",
        logs
    );
}
