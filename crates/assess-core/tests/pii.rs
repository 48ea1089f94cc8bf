//! Tests for the personal data screen.

use assess_core::{PiiGuard, check};

#[test]
fn test_student_id_is_never_flagged() {
    let verdict = check(&["Student ID", "student_id", "STUDENTID", "SID"]);
    assert!(verdict.is_valid);
    assert!(verdict.offending_columns.is_empty());
}

#[test]
fn test_student_email_is_flagged() {
    let verdict = check(&["Student ID", "Student Email", "Q1 [Score]"]);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.offending_columns, vec!["Student Email"]);
}

#[test]
fn test_parent_email_address_flagged_by_email() {
    let guard = PiiGuard::new();
    let verdict = guard.check(&["Parent Email Address"]);
    assert!(!verdict.is_valid);
    assert_eq!(guard.flag_reason("Parent Email Address"), Some("email"));
}

#[test]
fn test_underscored_assessment_id_is_allowed() {
    let verdict = check(&["Student_Assessment_ID"]);
    assert!(verdict.is_valid);
}

#[test]
fn test_allow_pattern_wins_over_block_tokens() {
    // "unit" and "address" are block tokens, but the column is a student id.
    let verdict = check(&["Student ID (unit address)"]);
    assert!(verdict.is_valid);
}

#[test]
fn test_offenders_keep_order_and_spelling() {
    let verdict = check(&[
        "  First_Name ",
        "Q1 [Score]",
        "Phone",
        "Date of Birth",
        "SSN",
        "Home Street",
        "Guardian",
    ]);
    assert!(!verdict.is_valid);
    assert_eq!(
        verdict.offending_columns,
        vec![
            "  First_Name ",
            "Phone",
            "Date of Birth",
            "SSN",
            "Home Street",
            "Guardian",
        ]
    );
}

#[test]
fn test_each_block_family_is_detected() {
    let guard = PiiGuard::new();
    let cases = [
        ("E-mail", "email"),
        ("Mobile Number", "phone"),
        ("Cell", "phone"),
        ("Social Security Number", "ssn"),
        ("Apt", "address"),
        ("Main Rd", "address"),
        ("Last Name", "name"),
        ("Full_Name", "name"),
        ("Student Name", "name"),
        ("Birth Date", "date_of_birth"),
        ("dob", "date_of_birth"),
    ];
    for (column, rule) in cases {
        assert_eq!(guard.flag_reason(column), Some(rule), "column {column}");
    }
}

#[test]
fn test_score_columns_pass() {
    let verdict = check(&["Timestamp", "Total score", "Q1 [Score]", "Q1 [Feedback]"]);
    assert!(verdict.is_valid);
}

#[test]
fn test_check_is_repeatable() {
    let columns = ["Email", "Q1 [Score]"];
    assert_eq!(check(&columns), check(&columns));
}
