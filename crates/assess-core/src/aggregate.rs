//! Mastery aggregation over learning target groups.

use assess_model::{AnalysisResult, LearningTargetGroup, score_column_name};
use polars::prelude::{DataFrame, DataType};

use crate::error::{AnalysisError, Result};

/// Counts, per group, the students whose correct total lies in the group's range.
///
/// `table` must be the output of [`normalize`](crate::normalize). Results follow
/// the order of `groups`. Each percentage is derived from its own count and the
/// shared total. A table without rows yields no results.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingColumn`] if a group question has no
/// `question + suffix` column.
pub fn aggregate(
    table: &DataFrame,
    groups: &[LearningTargetGroup],
    suffix: &str,
) -> Result<Vec<AnalysisResult>> {
    let total = table.height();
    if total == 0 {
        return Ok(Vec::new());
    }

    let mut results = Vec::with_capacity(groups.len());
    for group in groups {
        let correct = correct_counts(table, group.questions(), suffix)?;
        let count = correct.iter().filter(|&&n| group.accepts(n)).count();
        tracing::debug!(
            group = group.name(),
            count,
            total,
            min_correct = group.min_correct(),
            max_correct = group.max_correct(),
            "group aggregated"
        );
        results.push(AnalysisResult::new(group.name(), count, total));
    }
    Ok(results)
}

/// Row-wise sum of the binary score columns for `questions`.
pub fn correct_counts(table: &DataFrame, questions: &[String], suffix: &str) -> Result<Vec<usize>> {
    let mut counts = vec![0usize; table.height()];
    for question in questions {
        let values = binary_values(table, &score_column_name(question, suffix))?;
        for (count, value) in counts.iter_mut().zip(values) {
            *count += value;
        }
    }
    Ok(counts)
}

/// Values of one binary score column; nulls count as incorrect.
pub(crate) fn binary_values(table: &DataFrame, name: &str) -> Result<Vec<usize>> {
    let column = table
        .column(name)
        .map_err(|_| AnalysisError::MissingColumn {
            column: name.to_string(),
        })?;
    let casted = column.cast(&DataType::Int32)?;
    let values = casted
        .as_materialized_series()
        .i32()?
        .into_iter()
        .map(|value| usize::from(value.unwrap_or(0) > 0))
        .collect();
    Ok(values)
}
