// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[test]
fn parse_assigns_fields_positionally() {
    let expr = Expression::parse("*/15 0 1,15 JAN MON-FRI").unwrap();

    assert_eq!(expr.minute, "*/15");
    assert_eq!(expr.hour, "0");
    assert_eq!(expr.day_of_month, "1,15");
    assert_eq!(expr.month, "JAN");
    assert_eq!(expr.day_of_week, "MON-FRI");
}

#[test]
fn parse_collapses_whitespace_runs() {
    let expr = Expression::parse("  0\t5 \n *   *  1-5  ").unwrap();
    assert_eq!(expr.to_string(), "0 5 * * 1-5");
}

#[test]
fn parse_keeps_case() {
    let expr: Expression = "0 5 * jan mon".parse().unwrap();
    assert_eq!(expr.month, "jan");
    assert_eq!(expr.day_of_week, "mon");
}

#[parameterized(
    empty = { "" },
    blank = { "   \t " },
    one = { "*" },
    four = { "0 5 * *" },
    six = { "0 0 5 * * *" },
    seven = { "0 0 5 * * * 2026" },
)]
fn parse_rejects_wrong_field_count(input: &str) {
    let err = Expression::parse(input).unwrap_err();
    assert_eq!(err.field_name(), "expression");
    assert_eq!(err.reason, Reason::FieldCount);
}

#[test]
fn fields_iterate_in_order() {
    let expr = Expression::parse("a b c d e").unwrap();
    let fields: Vec<_> = expr.fields().collect();

    assert_eq!(
        fields,
        vec![
            (Field::Minute, "a"),
            (Field::Hour, "b"),
            (Field::DayOfMonth, "c"),
            (Field::Month, "d"),
            (Field::DayOfWeek, "e"),
        ]
    );
}

proptest! {
    #[test]
    fn any_other_token_count_is_structural(
        tokens in proptest::collection::vec("[0-9*/,A-Z-]{1,4}", 0..10usize)
    ) {
        prop_assume!(tokens.len() != 5);
        let input = tokens.join(" ");
        let err = Expression::parse(&input).unwrap_err();
        prop_assert_eq!(err.field_name(), "expression");
    }

    #[test]
    fn five_tokens_always_split(
        tokens in proptest::collection::vec("[0-9*/,A-Z#?-]{1,6}", 5)
    ) {
        let expr = Expression::parse(&tokens.join("  ")).unwrap();
        let values: Vec<&str> = expr.fields().map(|(_, v)| v).collect();
        prop_assert_eq!(values, tokens.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
