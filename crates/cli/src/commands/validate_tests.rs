// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn valid_expression_reports_ok() {
    let report = ValidationReport::check("0 5 * * 1-5");

    assert!(report.valid);
    assert_eq!(report.to_string(), "ok: 0 5 * * 1-5");
}

#[test]
fn invalid_field_is_named() {
    let report = ValidationReport::check("60 5 * * *");

    assert!(!report.valid);
    assert_eq!(
        report.to_string(),
        "invalid: 60 5 * * *: minute: value must be between 0 and 59"
    );
}

#[test]
fn field_count_is_reported_against_expression() {
    let report = ValidationReport::check("* * *");

    assert_eq!(
        report.to_string(),
        "invalid: * * *: expression: must have 5 fields"
    );
}

#[test]
fn json_report_includes_error() {
    let json = serde_json::to_value(ValidationReport::check("0 0 * 13 *")).unwrap();

    assert_eq!(json["expression"], "0 0 * 13 *");
    assert_eq!(json["valid"], false);
    assert_eq!(json["error"]["field"], "month");
    assert_eq!(json["error"]["message"], "value must be between 1 and 12");
}

#[test]
fn json_report_omits_error_when_valid() {
    let json = serde_json::to_value(ValidationReport::check("*/15 * * * *")).unwrap();

    assert_eq!(json["valid"], true);
    assert!(json.get("error").is_none());
}

#[test]
fn any_invalid_expression_fails_the_command() {
    let args = ValidateArgs {
        expressions: vec!["0 5 * * *".to_string(), "0 5 * *".to_string()],
        output: OutputFormat::Json,
    };

    let err = validate_cmd(args).unwrap_err();
    assert_eq!(err.to_string(), "1 of 2 expressions are invalid");
}
