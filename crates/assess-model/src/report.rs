//! Analysis output types.

use serde::{Deserialize, Serialize};

/// Mastery count for one learning target group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    /// Students whose correct count fell inside the group's range.
    pub count: usize,
    /// Students in the table.
    pub total: usize,
    /// `100 * count / total` with one decimal place and a trailing `%`.
    pub percent: String,
}

impl AnalysisResult {
    pub fn new(name: impl Into<String>, count: usize, total: usize) -> Self {
        Self {
            name: name.into(),
            count,
            total,
            percent: format_percent(count, total),
        }
    }
}

/// Formats `count / total` as a percentage with exactly one decimal digit.
///
/// A zero total formats as `0.0%`.
///
/// # Examples
///
/// ```
/// use assess_model::format_percent;
///
/// assert_eq!(format_percent(1, 2), "50.0%");
/// assert_eq!(format_percent(1, 3), "33.3%");
/// assert_eq!(format_percent(2, 3), "66.7%");
/// assert_eq!(format_percent(0, 0), "0.0%");
/// ```
pub fn format_percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let percent = 100.0 * count as f64 / total as f64;
    format!("{percent:.1}%")
}

/// Outcome of the PII screen over a table's column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiVerdict {
    pub is_valid: bool,
    /// Flagged columns in original order and spelling.
    pub offending_columns: Vec<String>,
}

impl PiiVerdict {
    pub fn from_offending(offending_columns: Vec<String>) -> Self {
        Self {
            is_valid: offending_columns.is_empty(),
            offending_columns,
        }
    }
}

/// Correct answers for a single question across all students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub question: String,
    pub correct: usize,
    pub total: usize,
}

impl QuestionSummary {
    pub fn percent(&self) -> String {
        format_percent(self.correct, self.total)
    }
}
