//! Learning target group definitions.
//!
//! A learning target groups several questions together with an accepted range
//! of correct answers. Students whose correct count falls inside the range are
//! counted as having mastered the target.
//!
//! Groups can only be built through [`LearningTargetGroup::new`], which enforces
//! the creation rules. Deserialization goes through the same constructor.

use serde::{Deserialize, Serialize};

use crate::error::{GroupError, Result};

/// Plain group definition as supplied by a caller (e.g. a JSON file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub name: String,
    pub questions: Vec<String>,
    pub min_correct: usize,
    pub max_correct: usize,
}

/// A validated learning target group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupDefinition", into = "GroupDefinition")]
pub struct LearningTargetGroup {
    name: String,
    questions: Vec<String>,
    min_correct: usize,
    max_correct: usize,
}

impl LearningTargetGroup {
    /// Creates a group, rejecting definitions that can never be analyzed.
    ///
    /// The name is trimmed. Repeated questions are dropped, keeping the order
    /// of first appearance, before the range is checked against the question
    /// count.
    pub fn new<I, S>(
        name: impl Into<String>,
        questions: I,
        min_correct: usize,
        max_correct: usize,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }

        let mut unique: Vec<String> = Vec::new();
        for question in questions {
            let question = question.into();
            if !unique.contains(&question) {
                unique.push(question);
            }
        }
        if unique.is_empty() {
            return Err(GroupError::NoQuestions { name });
        }
        if min_correct > max_correct {
            return Err(GroupError::MinExceedsMax {
                min: min_correct,
                max: max_correct,
            });
        }
        if max_correct > unique.len() {
            return Err(GroupError::MaxExceedsQuestions {
                max: max_correct,
                count: unique.len(),
            });
        }

        Ok(Self {
            name,
            questions: unique,
            min_correct,
            max_correct,
        })
    }

    /// Creates a group that counts every student (range `0..=questions`).
    pub fn unfiltered<I, S>(name: impl Into<String>, questions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(name, questions, 0, 0)?;
        group.max_correct = group.questions.len();
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn min_correct(&self) -> usize {
        self.min_correct
    }

    pub fn max_correct(&self) -> usize {
        self.max_correct
    }

    /// Returns true if a per-student correct count lies in the accepted range.
    pub fn accepts(&self, correct: usize) -> bool {
        (self.min_correct..=self.max_correct).contains(&correct)
    }

    /// Returns true if the range covers every possible correct count.
    pub fn is_unfiltered(&self) -> bool {
        self.min_correct == 0 && self.max_correct == self.questions.len()
    }
}

impl TryFrom<GroupDefinition> for LearningTargetGroup {
    type Error = GroupError;

    fn try_from(definition: GroupDefinition) -> Result<Self> {
        Self::new(
            definition.name,
            definition.questions,
            definition.min_correct,
            definition.max_correct,
        )
    }
}

impl From<LearningTargetGroup> for GroupDefinition {
    fn from(group: LearningTargetGroup) -> Self {
        Self {
            name: group.name,
            questions: group.questions,
            min_correct: group.min_correct,
            max_correct: group.max_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name_and_dedupes_questions() {
        let group = LearningTargetGroup::new("  Causes  ", ["Q1", "Q2", "Q1"], 1, 2).unwrap();
        assert_eq!(group.name(), "Causes");
        assert_eq!(group.questions(), ["Q1", "Q2"]);
    }

    #[test]
    fn test_unfiltered_covers_all_counts() {
        let group = LearningTargetGroup::unfiltered("All", ["Q1", "Q2", "Q3"]).unwrap();
        assert!(group.is_unfiltered());
        assert_eq!(group.max_correct(), 3);
        assert!((0..=3).all(|n| group.accepts(n)));
    }
}
