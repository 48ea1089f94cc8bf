//! Configuration options for assessment analysis.

use serde::{Deserialize, Serialize};

/// Suffix marking a column as a question score column.
pub const DEFAULT_SCORE_SUFFIX: &str = " [Score]";

/// Text prefix marking a score cell as correct.
pub const DEFAULT_CORRECT_PREFIX: &str = "1.00";

/// Overall correct ratio at or below which an advisory warning is raised.
pub const DEFAULT_LOW_CORRECTNESS_THRESHOLD: f64 = 0.20;

/// Column name holding the score for `question` under `suffix`.
pub fn score_column_name(question: &str, suffix: &str) -> String {
    format!("{question}{suffix}")
}

/// Options controlling how an upload is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Suffix identifying score columns (matched exactly, case-sensitive).
    pub score_suffix: String,

    /// Literal prefix a cell's text must start with to count as correct.
    ///
    /// This is a string test, not a numeric comparison: with the default
    /// `"1.00"`, a cell reading `"1.00 / 2"` also counts as correct.
    pub correct_prefix: String,

    /// Ratio of correct cells at or below which the prefix is probably wrong.
    pub low_correctness_threshold: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            score_suffix: DEFAULT_SCORE_SUFFIX.to_string(),
            correct_prefix: DEFAULT_CORRECT_PREFIX.to_string(),
            low_correctness_threshold: DEFAULT_LOW_CORRECTNESS_THRESHOLD,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_score_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.score_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_correct_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.correct_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_low_correctness_threshold(mut self, threshold: f64) -> Self {
        self.low_correctness_threshold = threshold;
        self
    }

    /// Column name holding the score for `question`.
    pub fn score_column(&self, question: &str) -> String {
        score_column_name(question, &self.score_suffix)
    }
}
