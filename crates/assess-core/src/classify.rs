//! Score column classification.

use std::collections::HashSet;

use polars::prelude::DataFrame;

/// Extracts question identifiers from the columns ending with `suffix`.
///
/// The match is exact and case-sensitive. Input order is preserved and other
/// columns are skipped. If two columns strip to the same question, the first
/// one wins.
///
/// # Examples
///
/// ```
/// use assess_core::classify;
///
/// let columns = ["Timestamp", "Q1 [Score]", "Q1 [Feedback]", "Q2 [Score]"];
/// assert_eq!(classify(&columns, " [Score]"), vec!["Q1", "Q2"]);
/// assert!(classify(&columns, " [Points]").is_empty());
/// ```
pub fn classify<S: AsRef<str>>(columns: &[S], suffix: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut questions = Vec::new();
    for column in columns {
        let Some(question) = column.as_ref().strip_suffix(suffix) else {
            continue;
        };
        if seen.insert(question) {
            questions.push(question.to_string());
        } else {
            tracing::debug!(question, "duplicate question ignored");
        }
    }
    questions
}

/// Classifies the columns of a loaded table.
pub fn classify_frame(df: &DataFrame, suffix: &str) -> Vec<String> {
    let names: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    classify(&names, suffix)
}
