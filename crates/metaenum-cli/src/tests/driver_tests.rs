//! Tests for the driver: table building, warnings and rendering

use super::*;
use clap::Parser;

fn args(extra: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("metaenum").chain(extra.iter().copied())).unwrap()
}

#[test]
fn test_build_table_resolves_values() {
    let table = build_table("A, B = 10, C, D = -1, E", ReprKind::I32).unwrap();
    let values: Vec<i128> = table.values().collect();
    assert_eq!(values, vec![0, 10, 11, -1, 0]);
    assert_eq!(table.name_of(11), "C");
}

#[test]
fn test_build_table_rejects_values_outside_repr() {
    let err = build_table("A = 255, B", ReprKind::U8).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("B"), "{message}");
    assert!(message.contains("256"), "{message}");
    assert!(message.contains("u8"), "{message}");

    assert!(build_table("A = -1", ReprKind::U64).is_err());
    assert!(build_table("A = -1", ReprKind::I8).is_ok());
}

#[test]
fn test_build_table_rejects_unsupported_initializer() {
    assert!(build_table("A = 1 << 4", ReprKind::I32).is_err());
}

#[test]
fn test_build_table_rejects_missing_name() {
    let err = build_table("A, , C", ReprKind::I32).unwrap_err();
    assert!(format!("{err:#}").contains("malformed member list"));
}

#[test]
fn test_duplicate_warnings() {
    let table = build_table("A = 1, B = 1, A = 7", ReprKind::I32).unwrap();
    let warnings = duplicate_warnings(&table);
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("repeats the value 1 of member 0"));
    assert!(warnings[1].contains("repeats the name `A` of member 0"));
}

#[test]
fn test_no_warnings_for_distinct_members() {
    let table = build_table("A, B, C", ReprKind::I32).unwrap();
    assert!(duplicate_warnings(&table).is_empty());
}

#[test]
fn test_render_table_text() {
    let table = build_table("LOW, HIGH = 100, HIGHER", ReprKind::U8).unwrap();
    let out = render_table(&table, ReprKind::U8, OutputFormat::Text).unwrap();
    assert_eq!(
        out,
        "3 members, repr u8\n  0    0  LOW\n  1  100  HIGH\n  2  101  HIGHER\n"
    );
}

#[test]
fn test_render_table_json() {
    let table = build_table("A, B = 5", ReprKind::I16).unwrap();
    let out = render_table(&table, ReprKind::I16, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed["repr"], "i16");
    assert_eq!(parsed["size"], 2);
    assert_eq!(parsed["string"], "A, B = 5");
    assert_eq!(parsed["members"][1]["name"], "B");
    assert_eq!(parsed["members"][1]["value"], 5);
    assert_eq!(parsed["members"][1]["string"], " B = 5");
    assert_eq!(parsed["members"][1]["index"], 1);
}

#[test]
fn test_render_query_text() {
    let table = build_table("A, B = 5, C", ReprKind::I32).unwrap();
    let render = |query: Query| render_query(&table, &query, OutputFormat::Text).unwrap();

    assert_eq!(render(Query::NameOf(6)), "C\n");
    assert_eq!(render(Query::NameOf(1)), "__INVALID_ENUM_VAL__\n");
    assert_eq!(render(Query::ValueOf("B".to_string())), "5\n");
    assert_eq!(render(Query::ValueOf("Z".to_string())), "none\n");
    assert_eq!(render(Query::IndexOf(5)), "1\n");
    assert_eq!(render(Query::IndexOf(42)), "3\n");
}

#[test]
fn test_render_query_json() {
    let table = build_table("A, B = -4", ReprKind::I32).unwrap();
    let query = Query::ValueOf("B".to_string());
    let out = render_query(&table, &query, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["query"], "value_of");
    assert_eq!(parsed["key"], "B");
    assert_eq!(parsed["result"], -4);

    let query = Query::ValueOf("Q".to_string());
    let out = render_query(&table, &query, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(parsed["result"].is_null());
}

#[test]
fn test_query_from_args() {
    assert_eq!(Query::from_args(&args(&["--text", "A"])), None);
    assert_eq!(
        Query::from_args(&args(&["--text", "A", "--name-of", "-2"])),
        Some(Query::NameOf(-2))
    );
    assert_eq!(
        Query::from_args(&args(&["--text", "A", "--value-of", "A"])),
        Some(Query::ValueOf("A".to_string()))
    );
    assert_eq!(
        Query::from_args(&args(&["--text", "A", "--index-of", "0"])),
        Some(Query::IndexOf(0))
    );
}

#[test]
fn test_run_with_inline_text() {
    let output = run(&args(&["--text", "A, B = 3, A", "--value-of", "A"])).unwrap();
    assert_eq!(output.stdout, "0\n");
    assert_eq!(output.warnings.len(), 1);
}

#[test]
fn test_run_without_input_fails() {
    let err = run(&args(&[])).unwrap_err();
    assert!(err.to_string().contains("no member list given"));
}

#[test]
fn test_query_keys_beyond_i64() {
    let table = build_table("HIGH = 18446744073709551614, TOP", ReprKind::U64).unwrap();
    let top = i128::from(u64::MAX);

    let out = render_query(&table, &Query::NameOf(top), OutputFormat::Text).unwrap();
    assert_eq!(out, "TOP\n");
    let out = render_query(&table, &Query::IndexOf(top), OutputFormat::Text).unwrap();
    assert_eq!(out, "1\n");

    let out = render_query(&table, &Query::NameOf(top), OutputFormat::Json).unwrap();
    assert_eq!(
        out,
        "{\"query\":\"name_of\",\"key\":18446744073709551615,\"result\":\"TOP\"}\n"
    );

    let output = run(&args(&[
        "--text",
        "HIGH = 18446744073709551614, TOP",
        "--repr",
        "u64",
        "--value-of",
        "TOP",
    ]))
    .unwrap();
    assert_eq!(output.stdout, "18446744073709551615\n");
}

#[test]
fn test_query_key_outside_any_repr_is_absent() {
    let table = build_table("A, B", ReprKind::I8).unwrap();
    let huge = i128::MAX;
    let out = render_query(&table, &Query::NameOf(huge), OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["result"], "__INVALID_ENUM_VAL__");
    assert_eq!(
        render_query(&table, &Query::IndexOf(huge), OutputFormat::Text).unwrap(),
        "2\n"
    );
}

#[test]
fn test_render_segments_json() {
    let out = render_segments("A, B = f(1, 2), , C,", OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let segments = parsed.as_array().unwrap();

    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0]["start"], 0);
    assert_eq!(segments[0]["end"], 1);
    assert_eq!(segments[0]["text"], "A");
    assert_eq!(segments[0]["name"], "A");
    assert_eq!(segments[1]["text"], " B = f(1, 2)");
    assert_eq!(segments[1]["name"], "B");
    assert!(segments[2]["name"].is_null());
    assert_eq!(segments[3]["name"], "C");
}

#[test]
fn test_render_segments_text() {
    let out = render_segments("A, B", OutputFormat::Text).unwrap();
    assert_eq!(
        out,
        "2 segments\n  0..1  A             \"A\"\n  2..4  B             \" B\"\n"
    );
}

#[test]
fn test_run_segments_skips_value_resolution() {
    let output = run(&args(&["--text", "A = 1 << 4, A", "--segments"])).unwrap();
    assert!(output.stdout.starts_with("2 segments\n"));
    assert!(output.warnings.is_empty());
}
