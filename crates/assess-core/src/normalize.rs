//! Binary score normalization.

use assess_ingest::column_strings;
use assess_model::score_column_name;
use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::error::{AnalysisError, Result};

/// Replaces each question's score column with 1 (correct) or 0 (incorrect).
///
/// A cell is correct when its text starts with `prefix`. This is a literal
/// string test: with prefix `"1.00"`, both `"1.00 / 1"` and `"1.00 / 2"` count
/// as correct. Null cells read as empty text and are therefore incorrect
/// unless the prefix is empty.
///
/// The input table is left untouched; a new table is returned in which the
/// score columns hold `Int32` values and every other column is unchanged.
///
/// Must be applied once per raw upload: on its own output the cells no longer
/// carry the original text.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingColumn`] if `question + suffix` is not a
/// column of `table`.
pub fn normalize(
    table: &DataFrame,
    questions: &[String],
    prefix: &str,
    suffix: &str,
) -> Result<DataFrame> {
    let mut binary = table.clone();
    for question in questions {
        let name = score_column_name(question, suffix);
        let column = table
            .column(&name)
            .map_err(|_| AnalysisError::MissingColumn {
                column: name.clone(),
            })?;
        let values: Vec<i32> = column_strings(column)
            .iter()
            .map(|text| i32::from(text.starts_with(prefix)))
            .collect();
        binary.with_column(Series::new(name.as_str().into(), values))?;
    }
    tracing::debug!(questions = questions.len(), "score columns normalized");
    Ok(binary)
}
