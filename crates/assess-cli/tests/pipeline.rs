//! Integration tests for the command pipeline.

use std::io::Write;

use assess_cli::pipeline::{
    AnalyzeReport, analyze_upload, load_session, questions_report, rejected_columns,
    screen_upload,
};
use assess_model::{AnalysisOptions, LearningTargetGroup};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn class_export() -> NamedTempFile {
    create_temp_csv(
        "Student ID,Q1 [Score],Q2 [Score]\n\
         S-001,1.00 / 1,1.00 / 1\n\
         S-002,1.00 / 1,0.00 / 1\n",
    )
}

#[test]
fn test_analyze_rejects_personal_data_columns() {
    let file = create_temp_csv(
        "Student Email,Student ID,Q1 [Score]\n\
         a@example.org,S-001,1.00 / 1\n",
    );
    let groups = vec![LearningTargetGroup::unfiltered("All", ["Q1"]).unwrap()];

    let error = analyze_upload(file.path(), ',', AnalysisOptions::default(), groups).unwrap_err();

    assert_eq!(
        rejected_columns(&error),
        Some(["Student Email".to_string()].as_slice())
    );
    assert!(error.to_string().contains("Student Email"));
}

#[test]
fn test_load_session_rejection_names_columns() {
    let file = create_temp_csv("Phone,Home Address,Q1 [Score]\n555,Main,1.00 / 1\n");

    let error = load_session(file.path(), ',', AnalysisOptions::default()).unwrap_err();

    let columns = rejected_columns(&error).unwrap();
    assert_eq!(columns, ["Phone", "Home Address"]);
}

#[test]
fn test_other_errors_are_not_rejections() {
    let file = create_temp_csv("Student ID,Notes\nS-001,late\n");

    let error = load_session(file.path(), ',', AnalysisOptions::default()).unwrap_err();

    assert!(rejected_columns(&error).is_none());
    assert!(error.to_string().contains("no score columns"));
}

#[test]
fn test_screen_upload_reports_verdict() {
    let file = create_temp_csv("Student Email,Q1 [Score]\na@example.org,1.00 / 1\n");
    let verdict = screen_upload(file.path(), ',').unwrap();
    assert!(!verdict.is_valid);
    assert_eq!(verdict.offending_columns, vec!["Student Email"]);

    let clean = class_export();
    assert!(screen_upload(clean.path(), ',').unwrap().is_valid);
}

#[test]
fn test_analyze_without_groups_lists_questions() {
    let file = class_export();

    let report = analyze_upload(file.path(), ',', AnalysisOptions::default(), Vec::new()).unwrap();

    let AnalyzeReport::Questions(questions) = report else {
        panic!("expected the question summary");
    };
    assert_eq!(questions.students, 2);
    let names: Vec<&str> = questions
        .questions
        .iter()
        .map(|summary| summary.question.as_str())
        .collect();
    assert_eq!(names, ["Q1", "Q2"]);
    assert_eq!(questions.questions[0].correct, 2);
    assert_eq!(questions.questions[1].correct, 1);
}

#[test]
fn test_analyze_mastery_json() {
    let file = class_export();
    let groups = vec![LearningTargetGroup::new("Both", ["Q1", "Q2"], 2, 2).unwrap()];

    let report = analyze_upload(file.path(), ',', AnalysisOptions::default(), groups).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["students"], 2);
    assert_eq!(json["questions"], serde_json::json!(["Q1", "Q2"]));
    assert_eq!(json["results"][0]["name"], "Both");
    assert_eq!(json["results"][0]["count"], 1);
    assert_eq!(json["results"][0]["total"], 2);
    assert_eq!(json["results"][0]["percent"], "50.0%");
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn test_analyze_json_carries_low_correctness_warning() {
    let file = create_temp_csv(
        "Q1 [Score],Q2 [Score]\n\
         0.00 / 1,0.00 / 1\n\
         0.00 / 1,0.00 / 1\n",
    );
    let groups = vec![LearningTargetGroup::unfiltered("All", ["Q1", "Q2"]).unwrap()];

    let report = analyze_upload(file.path(), ',', AnalysisOptions::default(), groups).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["results"][0]["percent"], "100.0%");
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_analyze_rejects_unknown_question() {
    let file = class_export();
    let groups = vec![LearningTargetGroup::new("Ghost", ["Q9"], 0, 1).unwrap()];

    let error = analyze_upload(file.path(), ',', AnalysisOptions::default(), groups).unwrap_err();

    assert!(error.to_string().contains("Q9"));
}

#[test]
fn test_questions_report_uses_delimiter() {
    let file = create_temp_csv("Q1 [Score];Q2 [Score]\n1.00 / 1;0.00 / 1\n");

    let session = load_session(file.path(), ';', AnalysisOptions::default()).unwrap();
    let report = questions_report(&session).unwrap();

    assert_eq!(report.students, 1);
    assert_eq!(report.questions.len(), 2);
}

#[test]
fn test_non_ascii_delimiter_is_rejected() {
    let file = class_export();
    let error = load_session(file.path(), '§', AnalysisOptions::default()).unwrap_err();
    assert!(error.to_string().contains("ASCII"));
}
