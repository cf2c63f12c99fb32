//! End-to-end checks of the console interaction using in-memory streams.

use std::io::Cursor;

use clap::Parser;
use fibseq_cli::{run_with, Cli, InvalidInputError, Outcome, INVALID_INPUT_MESSAGE, PROMPT};

fn run_prompted(args: &[&str], stdin: &str) -> (Outcome, String) {
    let cli = Cli::parse_from(args);
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut output = Vec::new();
    let outcome = run_with(&cli, &mut input, &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_prompted_count_prints_sequence() {
    let (outcome, out) = run_prompted(&["fibseq"], "5\n");
    assert_eq!(outcome, Outcome::Printed(5));
    assert_eq!(out, format!("{PROMPT}0 1 1 2 3\n"));
}

#[test]
fn test_ten_terms() {
    let (_, out) = run_prompted(&["fibseq", "10"], "");
    assert_eq!(out, "0 1 1 2 3 5 8 13 21 34\n");
}

#[test]
fn test_zero_prints_empty_line() {
    let (outcome, out) = run_prompted(&["fibseq"], "0\n");
    assert_eq!(outcome, Outcome::Printed(0));
    assert_eq!(out, format!("{PROMPT}\n"));
}

#[test]
fn test_argument_skips_prompt() {
    let (outcome, out) = run_prompted(&["fibseq", "2"], "ignored\n");
    assert_eq!(outcome, Outcome::Printed(2));
    assert_eq!(out, "0 1\n");
}

#[test]
fn test_non_numeric_input_is_rejected() {
    let (outcome, out) = run_prompted(&["fibseq"], "abc\n");
    assert_eq!(
        outcome,
        Outcome::Rejected(InvalidInputError::NotAnInteger("abc".to_string()))
    );
    assert_eq!(out, format!("{PROMPT}{INVALID_INPUT_MESSAGE}\n"));
}

#[test]
fn test_negative_input_is_rejected() {
    let (outcome, out) = run_prompted(&["fibseq", "-3"], "");
    assert!(matches!(outcome, Outcome::Rejected(InvalidInputError::Negative(_))));
    assert_eq!(out, format!("{INVALID_INPUT_MESSAGE}\n"));
}

#[test]
fn test_non_utf8_input_is_rejected() {
    let cli = Cli::parse_from(["fibseq"]);
    let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
    let mut output = Vec::new();
    let outcome = run_with(&cli, &mut input, &mut output).unwrap();
    assert!(matches!(outcome, Outcome::Rejected(InvalidInputError::NotAnInteger(_))));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{PROMPT}{INVALID_INPUT_MESSAGE}\n")
    );
}

#[test]
fn test_timing_still_prints_sequence() {
    let (outcome, out) = run_prompted(&["fibseq", "6", "--timing"], "");
    assert_eq!(outcome, Outcome::Printed(6));
    assert_eq!(out, "0 1 1 2 3 5\n");
}

#[test]
fn test_end_of_input_is_rejected() {
    let (outcome, out) = run_prompted(&["fibseq"], "");
    assert_eq!(outcome, Outcome::Rejected(InvalidInputError::Empty));
    assert_eq!(out, format!("{PROMPT}{INVALID_INPUT_MESSAGE}\n"));
}

#[test]
fn test_count_beyond_exact_range_is_rejected() {
    let (outcome, out) = run_prompted(&["fibseq", "188"], "");
    assert!(matches!(
        outcome,
        Outcome::Rejected(InvalidInputError::TooLarge { max: 187, .. })
    ));
    assert_eq!(out, format!("{INVALID_INPUT_MESSAGE}\n"));
}

#[test]
fn test_largest_exact_count_is_printed() {
    let (outcome, out) = run_prompted(&["fibseq", "187"], "");
    assert_eq!(outcome, Outcome::Printed(187));
    assert!(out.trim_end().ends_with("332825110087067562321196029789634457848"));
}

#[test]
fn test_header_and_list_format() {
    let (_, out) = run_prompted(&["fibseq", "4", "--header", "--format", "list"], "");
    assert_eq!(out, "Fibonacci sequence:\n[0, 1, 1, 2]\n");
}

#[test]
fn test_json_format() {
    let (_, out) = run_prompted(&["fibseq", "3", "-f", "json"], "");
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["terms"], serde_json::json!([0, 1, 1]));
}

#[test]
fn test_rejected_input_prints_no_header() {
    let (_, out) = run_prompted(&["fibseq", "x", "--header"], "");
    assert_eq!(out, format!("{INVALID_INPUT_MESSAGE}\n"));
}
