//! Error types for learning target group definitions.

use thiserror::Error;

/// Reasons a learning target group definition is rejected at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The group name is empty or whitespace only.
    #[error("learning target name must not be empty")]
    EmptyName,

    /// No questions were selected for the group.
    #[error("learning target '{name}' must include at least one question")]
    NoQuestions { name: String },

    /// The minimum number of correct answers is above the maximum.
    #[error("minimum correct ({min}) cannot be greater than maximum correct ({max})")]
    MinExceedsMax { min: usize, max: usize },

    /// The maximum number of correct answers is above the number of questions.
    #[error(
        "maximum correct ({max}) cannot be greater than the number of selected questions ({count})"
    )]
    MaxExceedsQuestions { max: usize, count: usize },

    /// A selected question is not one of the classified score questions.
    #[error("question '{question}' is not a score column in the uploaded data")]
    UnknownQuestion { question: String },

    /// A group with the same name is already defined.
    #[error("a learning target named '{name}' already exists")]
    DuplicateName { name: String },
}

/// Result type for group operations.
pub type Result<T> = std::result::Result<T, GroupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_thresholds() {
        let err = GroupError::MaxExceedsQuestions { max: 4, count: 3 };
        assert_eq!(
            err.to_string(),
            "maximum correct (4) cannot be greater than the number of selected questions (3)"
        );
    }
}
