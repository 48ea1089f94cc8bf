//! Per-question correctness and the low-correctness advisory.

use assess_model::{QuestionSummary, score_column_name};
use polars::prelude::DataFrame;

use crate::aggregate::binary_values;
use crate::error::Result;

/// Correct answers per question, in question order.
pub fn correctness_summary(
    binary: &DataFrame,
    questions: &[String],
    suffix: &str,
) -> Result<Vec<QuestionSummary>> {
    questions
        .iter()
        .map(|question| {
            let values = binary_values(binary, &score_column_name(question, suffix))?;
            Ok(QuestionSummary {
                question: question.clone(),
                correct: values.iter().sum(),
                total: values.len(),
            })
        })
        .collect()
}

/// Fraction of all score cells marked correct, or `None` when there are no cells.
pub fn overall_correct_ratio(summaries: &[QuestionSummary]) -> Option<f64> {
    let cells: usize = summaries.iter().map(|summary| summary.total).sum();
    if cells == 0 {
        return None;
    }
    let correct: usize = summaries.iter().map(|summary| summary.correct).sum();
    Some(correct as f64 / cells as f64)
}

/// Advisory text when the correct ratio is at or below `threshold`.
///
/// A very low ratio usually means the correct prefix does not match how the
/// export writes full marks.
pub fn low_correctness_warning(ratio: f64, threshold: f64, prefix: &str) -> Option<String> {
    if ratio > threshold {
        return None;
    }
    Some(format!(
        "only {:.1}% of score cells start with '{prefix}' (threshold {:.1}%); \
         check the correct notation setting",
        ratio * 100.0,
        threshold * 100.0
    ))
}
