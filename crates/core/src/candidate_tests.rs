// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn candidate_reads_generator_json() {
    let candidate: Candidate =
        serde_json::from_str(r#"{"cron": "30 14 * * 1-5", "error": ""}"#).unwrap();

    assert_eq!(candidate.expression, "30 14 * * 1-5");
    assert_eq!(candidate.advisory(), None);
}

#[test]
fn candidate_fields_default_to_empty() {
    let candidate: Candidate = serde_json::from_str(r#"{"error": "no such date"}"#).unwrap();

    assert_eq!(candidate.expression, "");
    assert_eq!(candidate.advisory(), Some("no such date"));
}

#[test]
fn candidate_builder() {
    let candidate = Candidate::new("0 0 * * *").with_advisory("too vague");
    assert_eq!(candidate.expression, "0 0 * * *");
    assert_eq!(candidate.advisory(), Some("too vague"));
}

#[test]
fn scheduled_response_omits_error() {
    let response = CronResponse::scheduled("0 0 * * *", vec!["2026-01-20T00:00:00Z".into()]);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "cron_expression": "0 0 * * *",
            "next_run_times": ["2026-01-20T00:00:00Z"],
        })
    );
    assert!(!response.is_rejected());
}

#[test]
fn rejected_response_only_has_error() {
    let response = CronResponse::rejected("Minutes can only be between 0 and 59");
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "error_message": "Minutes can only be between 0 and 59" })
    );
    assert!(response.is_rejected());
}

#[test]
fn scheduled_without_times_omits_list() {
    let response = CronResponse::scheduled("0 0 * * *", vec![]);
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"cron_expression":"0 0 * * *"}"#);
}

#[test]
fn display_lists_run_times() {
    let response = CronResponse::scheduled(
        "0 0 * * *",
        vec![
            "2026-01-20T00:00:00Z".into(),
            "2026-01-21T00:00:00Z".into(),
        ],
    );
    assert_eq!(
        response.to_string(),
        "0 0 * * *\n  2026-01-20T00:00:00Z\n  2026-01-21T00:00:00Z"
    );
    assert_eq!(
        CronResponse::rejected("bad").to_string(),
        "error: bad"
    );
}
