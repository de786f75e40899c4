// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use ct_adapters::FakeScheduleAdapter;

fn after() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 19, 10, 30, 0).unwrap()
}

#[test]
fn lists_requested_number_of_times() {
    let schedule = FakeScheduleAdapter::new();

    let response = upcoming(&schedule, "0 * * * *", after(), 3).unwrap();

    assert_eq!(response.cron_expression, "0 * * * *");
    assert_eq!(
        response.next_run_times,
        vec![
            "2026-01-19T11:30:00Z",
            "2026-01-19T12:30:00Z",
            "2026-01-19T13:30:00Z",
        ]
    );
    assert_eq!(schedule.calls()[0].count, 3);
}

#[test]
fn expression_is_passed_with_single_spaces() {
    let schedule = FakeScheduleAdapter::new();

    let response = upcoming(&schedule, "  0   5 * *  1-5 ", after(), 1).unwrap();

    assert_eq!(response.cron_expression, "0 5 * * 1-5");
    assert_eq!(schedule.calls()[0].expression, "0 5 * * 1-5");
}

#[test]
fn invalid_expression_is_not_scheduled() {
    let schedule = FakeScheduleAdapter::new();

    let err = upcoming(&schedule, "0 24 * * *", after(), 5).unwrap_err();

    assert_eq!(
        err.to_string(),
        "cron validation error in hour: value must be between 0 and 23"
    );
    assert!(schedule.calls().is_empty());
}

#[test]
fn schedule_failure_is_an_error() {
    let err = upcoming(&FakeScheduleAdapter::failing(), "0 5 * * *", after(), 5);
    assert!(err.is_err());
}

#[test]
fn after_accepts_offsets() {
    let parsed = parse_after("2026-01-19T12:30:00+02:00").unwrap();
    assert_eq!(parsed, after());
}

#[test]
fn after_rejects_garbage() {
    let err = parse_after("tomorrow").unwrap_err();
    assert_eq!(err.message, "invalid --after timestamp 'tomorrow'");
}
