//! Data model for assessment mastery analysis.
//!
//! Plain types shared between the analysis core and the presentation layer:
//! learning target groups, analysis results, PII verdicts and options.

pub mod error;
pub mod group;
pub mod options;
pub mod report;

pub use error::{GroupError, Result};
pub use group::{GroupDefinition, LearningTargetGroup};
pub use options::{
    AnalysisOptions, DEFAULT_CORRECT_PREFIX, DEFAULT_LOW_CORRECTNESS_THRESHOLD,
    DEFAULT_SCORE_SUFFIX, score_column_name,
};
pub use report::{AnalysisResult, PiiVerdict, QuestionSummary, format_percent};
