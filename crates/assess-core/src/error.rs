//! Error types for the analysis pipeline.

use assess_ingest::IngestError;
use assess_model::GroupError;
use thiserror::Error;

/// Errors raised while preparing or analyzing an upload.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No column ends with the configured score suffix.
    #[error("no score columns found ending with '{suffix}'; check the score suffix setting")]
    NoScoreColumns { suffix: String },

    /// One or more column names look like personal data.
    #[error(
        "upload rejected: columns may contain personal information: {}",
        columns.join(", ")
    )]
    PiiDetected { columns: Vec<String> },

    /// An expected score column is absent from the table.
    #[error("score column '{column}' not found in the uploaded data")]
    MissingColumn { column: String },

    /// An operation needs an upload but the session has none.
    #[error("no upload loaded")]
    NoUpload,

    #[error(transparent)]
    Group(#[from] GroupError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for AnalysisError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pii_error_lists_columns() {
        let err = AnalysisError::PiiDetected {
            columns: vec!["Email".to_string(), "Phone".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "upload rejected: columns may contain personal information: Email, Phone"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Q1".into());
        let err: AnalysisError = polars_err.into();
        assert!(matches!(err, AnalysisError::DataFrame { .. }));
    }
}
