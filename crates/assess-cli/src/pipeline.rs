//! Command bodies shared by the binary and its tests.
//!
//! Each function loads an export, runs the gated analysis and returns a
//! serializable report. Rendering is left to the caller.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span};

use assess_core::{AnalysisError, AnalysisSession, check};
use assess_ingest::{ReadOptions, read_score_table_with_options};
use assess_model::{
    AnalysisOptions, AnalysisResult, LearningTargetGroup, PiiVerdict, QuestionSummary,
};

/// Per-question correct rates of an export.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsReport {
    pub students: usize,
    pub questions: Vec<QuestionSummary>,
    pub warnings: Vec<String>,
}

/// Learning target results of an export.
#[derive(Debug, Clone, Serialize)]
pub struct MasteryReport {
    pub students: usize,
    pub questions: Vec<String>,
    pub results: Vec<AnalysisResult>,
    pub warnings: Vec<String>,
}

/// Output of `analyze`: mastery results, or the question list when no
/// learning targets were given.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalyzeReport {
    Questions(QuestionsReport),
    Mastery(MasteryReport),
}

/// Reads an export with a single-character ASCII delimiter.
pub fn read_upload(file: &Path, delimiter: char) -> Result<DataFrame> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter must be a single ASCII character"))?;
    let options = ReadOptions::default().with_delimiter(delimiter);
    read_score_table_with_options(file, options)
        .with_context(|| format!("load export: {}", file.display()))
}

/// Reads an export and runs the gated preparation on it.
///
/// A rejected upload surfaces as an [`AnalysisError`] inside the returned
/// error; see [`rejected_columns`].
pub fn load_session(
    file: &Path,
    delimiter: char,
    options: AnalysisOptions,
) -> Result<AnalysisSession> {
    let df = read_upload(file, delimiter)?;
    let mut session = AnalysisSession::new(options);

    let span = info_span!("analysis", file = %file.display());
    let start = Instant::now();
    span.in_scope(|| session.load(&df).map(|_| ()))?;
    info!(
        questions = session.questions().len(),
        duration_ms = start.elapsed().as_millis(),
        "upload ready"
    );
    Ok(session)
}

/// Offending column names when `error` is a personal data rejection.
pub fn rejected_columns(error: &anyhow::Error) -> Option<&[String]> {
    match error.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::PiiDetected { columns }) => Some(columns.as_slice()),
        _ => None,
    }
}

pub fn questions_report(session: &AnalysisSession) -> Result<QuestionsReport> {
    let upload = session.upload().ok_or(AnalysisError::NoUpload)?;
    Ok(QuestionsReport {
        students: upload.student_count(),
        questions: upload.summaries.clone(),
        warnings: upload.warnings.clone(),
    })
}

/// Screens the column names of an export without analyzing it.
pub fn screen_upload(file: &Path, delimiter: char) -> Result<PiiVerdict> {
    let df = read_upload(file, delimiter)?;
    let columns: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    Ok(check(&columns))
}

/// Runs the full analysis for `groups` over an export.
pub fn analyze_upload(
    file: &Path,
    delimiter: char,
    options: AnalysisOptions,
    groups: Vec<LearningTargetGroup>,
) -> Result<AnalyzeReport> {
    let mut session = load_session(file, delimiter, options)?;
    if groups.is_empty() {
        info!("no learning targets given; listing questions");
        return questions_report(&session).map(AnalyzeReport::Questions);
    }
    for group in groups {
        session.insert_group(group)?;
    }

    let results = session.analyze()?;
    let students = session
        .upload()
        .map(|upload| upload.student_count())
        .unwrap_or_default();
    Ok(AnalyzeReport::Mastery(MasteryReport {
        students,
        questions: session.questions().to_vec(),
        results,
        warnings: session.warnings().to_vec(),
    }))
}
