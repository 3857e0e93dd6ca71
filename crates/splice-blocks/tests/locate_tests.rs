//! Integration tests for boundary location.

use pretty_assertions::assert_eq;
use rstest::rstest;
use splice_blocks::{Error, LocateStrategy, Locator};

const END_MARKER: &str = "// Initialize tech state";

fn locator(strategy: LocateStrategy) -> Locator {
    Locator::for_block("TECH_DEFINITIONS", END_MARKER, strategy).unwrap()
}

#[rstest]
#[case(LocateStrategy::Pattern)]
#[case(LocateStrategy::Lines)]
fn test_missing_start_marker(#[case] strategy: LocateStrategy) {
    let target = "let x = {\n};\n\n// Initialize tech state\n";
    let err = locator(strategy).locate(target).unwrap_err();
    assert!(matches!(
        err,
        Error::BoundaryNotFound {
            start: None,
            end: Some(_),
            ..
        }
    ));
}

#[rstest]
#[case(LocateStrategy::Pattern)]
#[case(LocateStrategy::Lines)]
fn test_missing_end_marker(#[case] strategy: LocateStrategy) {
    let target = "const TECH_DEFINITIONS = {\n  x: {},\n};\n";
    let err = locator(strategy).locate(target).unwrap_err();
    assert!(matches!(
        err,
        Error::BoundaryNotFound {
            start: Some(_),
            end: None,
            ..
        }
    ));
}

#[rstest]
#[case(LocateStrategy::Pattern)]
#[case(LocateStrategy::Lines)]
fn test_end_before_start_is_rejected(#[case] strategy: LocateStrategy) {
    let target = "const OTHER = {\n};\n\n// Initialize tech state\nconst TECH_DEFINITIONS = {\n  x: {},\n};\n";
    let err = locator(strategy).locate(target).unwrap_err();
    assert!(matches!(
        err,
        Error::BoundaryNotFound {
            start: Some(_),
            end: Some(_),
            ..
        }
    ));
}

#[test]
fn test_first_match_wins() {
    let target = "const TECH_DEFINITIONS = {\n  x: {},\n};\n\n// Initialize tech state\n\
                  const TECH_DEFINITIONS = {\n};\n\n// Initialize tech state\n";
    let b = locator(LocateStrategy::Pattern).locate(target).unwrap();
    assert_eq!(&target[b.start..b.end], "\n  x: {},");
}

#[test]
fn test_pattern_tolerates_whitespace_before_end_marker() {
    let target = "const TECH_DEFINITIONS = {\n  x: {},\n};  \n\n\n    // Initialize tech state\n";
    let b = locator(LocateStrategy::Pattern).locate(target).unwrap();
    assert_eq!(&target[b.start..b.end], "\n  x: {},");
}

#[test]
fn test_lines_requires_marker_at_line_start() {
    let target = "  const TECH_DEFINITIONS = {\n};\n\n// Initialize tech state\n";
    assert!(locator(LocateStrategy::Lines).locate(target).is_err());
}

#[test]
fn test_lines_keeps_preceding_content() {
    let target = "// header\nconst TECH_DEFINITIONS = {\n  x: {},\n};\n\n// Initialize tech state\nrest();\n";
    let b = locator(LocateStrategy::Lines).locate(target).unwrap();
    assert_eq!(&target[..b.start], "// header\n");
    assert_eq!(&target[b.end..], "// Initialize tech state\nrest();\n");
}

#[test]
fn test_custom_markers() {
    let locator = Locator::new("let DATA = {", "// end of data", LocateStrategy::Pattern).unwrap();
    let target = "let DATA = {\n  k: 1,\n};\n// end of data\n";
    let b = locator.locate(target).unwrap();
    assert_eq!(&target[b.start..b.end], "\n  k: 1,");
    assert_eq!(locator.start_marker(), "let DATA = {");
    assert_eq!(locator.end_marker(), "// end of data");
}
