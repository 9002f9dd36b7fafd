//! Integration tests for the scheme parser and descriptor format

use scheme_viz::{parse, Scheme, SchemeError, Search};

#[test]
fn test_parse_two_search_scheme() {
    let input = "01 00 01\n10 01 11\n";

    let scheme = parse(input).expect("Should parse");
    assert_eq!(scheme.len(), 2);
    assert_eq!(scheme.searches[0].pi, vec![0, 1]);
    assert_eq!(scheme.searches[1].lower, vec![0, 1]);
    assert_eq!(scheme.searches[1].upper, vec![1, 1]);
}

#[test]
fn test_parse_with_comments_and_blank_lines() {
    let input = r#"
# pi    L    U
012 000 022

# the reverse direction
210 000 012
"#;

    let scheme = parse(input).expect("Should parse");
    assert_eq!(scheme.len(), 2);
    assert_eq!(scheme.block_count(), Some(3));
}

#[test]
fn test_parse_tolerates_extra_whitespace() {
    let scheme = parse("  01   00 \t 01  \n").expect("Should parse");
    assert_eq!(scheme.len(), 1);
}

#[test]
fn test_parse_rejects_mixed_block_counts() {
    let err = parse("01 00 01\n012 000 012\n").unwrap_err();
    assert_eq!(err, SchemeError::BlockCountMismatch { line: 2 });
}

#[test]
fn test_parse_reports_offending_line() {
    let err = parse("01 00 01\n10 01\n").unwrap_err();
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_error_report_points_at_source() {
    let source = "01 00 01\n10 0x 11\n";
    let err = parse(source).unwrap_err();
    let report = err.format(source, "scheme.txt");
    assert!(report.contains("scheme.txt"));
}

#[test]
fn test_display_round_trips_through_parser() {
    let scheme = Scheme::new(vec![
        Search::new(vec![0, 1, 2], vec![0, 0, 0], vec![0, 2, 2]),
        Search::new(vec![2, 1, 0], vec![0, 0, 0], vec![0, 1, 2]),
        Search::new(vec![1, 2, 0], vec![0, 1, 1], vec![1, 2, 2]),
    ]);

    let reparsed = parse(&scheme.to_string()).expect("Display output should parse");
    assert_eq!(reparsed, scheme);
}

#[test]
fn test_empty_input_is_an_empty_scheme() {
    let scheme = parse("# just a comment\n").expect("Should parse");
    assert!(scheme.is_empty());
}
