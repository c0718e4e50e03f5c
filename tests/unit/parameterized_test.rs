//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use chrono::NaiveDate;
use test_case::test_case;

use todoapp::core::models::Priority;
use todoapp::core::services::{
    SortDirection, SortKey, check_text, format_duration, parse_due_date, parse_priority,
};

// =============================================================================
// Priority Parsing Tests
// =============================================================================

#[test_case("HIGH", Some(Priority::High) ; "upper high")]
#[test_case("medium", Some(Priority::Medium) ; "lower medium")]
#[test_case(" Low ", Some(Priority::Low) ; "padded mixed case low")]
#[test_case("P1", None ; "unknown code")]
#[test_case("", None ; "empty")]
fn test_parse_priority(raw: &str, expected: Option<Priority>) {
    assert_eq!(parse_priority("priority", raw).ok(), expected);
}

// =============================================================================
// Due Date Parsing Tests
// =============================================================================

#[test_case("2026-03-15", Some((2026, 3, 15)) ; "iso date")]
#[test_case("2028-02-29", Some((2028, 2, 29)) ; "leap day")]
#[test_case("  2026-12-01  ", Some((2026, 12, 1)) ; "surrounding spaces")]
fn test_parse_due_date_valid(raw: &str, expected: Option<(i32, u32, u32)>) {
    let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
    assert_eq!(parse_due_date("dueDate", raw), Ok(expected));
}

#[test_case("2027-02-29" ; "not a leap year")]
#[test_case("2026-13-01" ; "month out of range")]
#[test_case("2026/03/15" ; "slashes")]
#[test_case("2026-3-15" ; "unpadded month")]
#[test_case("20260315" ; "compact")]
#[test_case("2026-03-15T10:00" ; "with time")]
fn test_parse_due_date_malformed(raw: &str) {
    let err = parse_due_date("dueDate", raw).unwrap_err();
    assert!(err.is_malformed());
}

#[test_case("" ; "empty")]
#[test_case("   " ; "blank")]
fn test_parse_due_date_blank_is_none(raw: &str) {
    assert_eq!(parse_due_date("dueDate", raw), Ok(None));
}

// =============================================================================
// Text Length Tests
// =============================================================================

#[test_case(1, true ; "single char")]
#[test_case(120, true ; "at limit")]
#[test_case(121, false ; "over limit")]
fn test_text_length(len: usize, ok: bool) {
    assert_eq!(check_text(Some(&"é".repeat(len))).is_ok(), ok);
}

// =============================================================================
// Sort Parameter Tests
// =============================================================================

#[test_case(Some("priority"), SortKey::Priority ; "priority")]
#[test_case(Some("dueDate"), SortKey::DueDate ; "camel due date")]
#[test_case(Some("duedate"), SortKey::DueDate ; "lower due date")]
#[test_case(None, SortKey::Priority ; "absent")]
fn test_sort_key(param: Option<&str>, expected: SortKey) {
    assert_eq!(SortKey::from_param(param), expected);
}

#[test_case(Some("asc"), SortDirection::Ascending ; "asc")]
#[test_case(Some("ASC"), SortDirection::Ascending ; "upper asc")]
#[test_case(Some("desc"), SortDirection::Descending ; "desc")]
#[test_case(None, SortDirection::Descending ; "absent")]
fn test_sort_direction(param: Option<&str>, expected: SortDirection) {
    assert_eq!(SortDirection::from_param(param), expected);
}

// =============================================================================
// Duration Formatting Tests
// =============================================================================

#[test_case(0, "00:00:00:00" ; "zero")]
#[test_case(59_999, "00:00:00:59" ; "just under a minute")]
#[test_case(3_661_000, "00:01:01:01" ; "hour minute second")]
#[test_case(90_061_000, "01:01:01:01" ; "one of each")]
#[test_case(10 * 86_400_000, "10:00:00:00" ; "ten days")]
fn test_format_duration(millis: i64, expected: &str) {
    assert_eq!(format_duration(millis), expected);
}
