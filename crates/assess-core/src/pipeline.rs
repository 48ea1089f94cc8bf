//! Gated preparation of an uploaded table.
//!
//! Stages run strictly in order: classify, PII gate, normalize, correctness
//! check. Nothing downstream of the PII gate runs on a rejected upload.

use std::time::Instant;

use assess_model::{AnalysisOptions, QuestionSummary};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use crate::classify::classify;
use crate::error::{AnalysisError, Result};
use crate::normalize::normalize;
use crate::pii::PiiGuard;
use crate::summary::{correctness_summary, low_correctness_warning, overall_correct_ratio};

/// An upload that passed the gates and has binary score columns.
#[derive(Debug, Clone)]
pub struct PreparedUpload {
    /// Classified questions, in column order.
    pub questions: Vec<String>,
    /// Table with score columns replaced by 0/1.
    pub binary: DataFrame,
    /// Correct answers per question.
    pub summaries: Vec<QuestionSummary>,
    /// Advisory messages; processing continued regardless.
    pub warnings: Vec<String>,
}

impl PreparedUpload {
    /// Number of students (rows).
    pub fn student_count(&self) -> usize {
        self.binary.height()
    }
}

/// Classifies, screens and normalizes a raw table.
///
/// # Errors
///
/// - [`AnalysisError::NoScoreColumns`] when no column carries the score suffix.
/// - [`AnalysisError::PiiDetected`] when a column name looks like personal data.
/// - [`AnalysisError::MissingColumn`] if a classified column cannot be found.
pub fn prepare_upload(raw: &DataFrame, options: &AnalysisOptions) -> Result<PreparedUpload> {
    let span = info_span!("prepare", rows = raw.height(), columns = raw.width());
    let _guard = span.enter();
    let start = Instant::now();

    let columns: Vec<String> = raw
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let questions = classify(&columns, &options.score_suffix);
    if questions.is_empty() {
        return Err(AnalysisError::NoScoreColumns {
            suffix: options.score_suffix.clone(),
        });
    }

    let verdict = PiiGuard::new().check(&columns);
    if !verdict.is_valid {
        warn!(
            offending = verdict.offending_columns.len(),
            "upload rejected by personal data screen"
        );
        return Err(AnalysisError::PiiDetected {
            columns: verdict.offending_columns,
        });
    }

    let binary = normalize(
        raw,
        &questions,
        &options.correct_prefix,
        &options.score_suffix,
    )?;
    let summaries = correctness_summary(&binary, &questions, &options.score_suffix)?;

    let mut warnings = Vec::new();
    if let Some(ratio) = overall_correct_ratio(&summaries)
        && let Some(message) = low_correctness_warning(
            ratio,
            options.low_correctness_threshold,
            &options.correct_prefix,
        )
    {
        warn!(ratio, "low overall correctness");
        warnings.push(message);
    }

    info!(
        questions = questions.len(),
        students = binary.height(),
        duration_ms = start.elapsed().as_millis(),
        "upload prepared"
    );

    Ok(PreparedUpload {
        questions,
        binary,
        summaries,
        warnings,
    })
}
