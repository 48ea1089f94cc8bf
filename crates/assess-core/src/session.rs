//! Analysis session state owned by the presentation layer.
//!
//! A session holds at most one prepared upload and the learning target groups
//! defined against it. Any failure while loading an upload clears both, so a
//! rejected file never leaves derived data behind.

use assess_model::{AnalysisOptions, AnalysisResult, GroupError, LearningTargetGroup};
use polars::prelude::DataFrame;

use crate::aggregate::aggregate;
use crate::error::{AnalysisError, Result};
use crate::pipeline::{PreparedUpload, prepare_upload};

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    options: AnalysisOptions,
    upload: Option<PreparedUpload>,
    groups: Vec<LearningTargetGroup>,
}

impl AnalysisSession {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            upload: None,
            groups: Vec::new(),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Prepares `raw` and makes it the current upload.
    ///
    /// Groups defined against a previous upload are kept only if every one of
    /// their questions is still a score question. On error the session is reset.
    pub fn load(&mut self, raw: &DataFrame) -> Result<&PreparedUpload> {
        match prepare_upload(raw, &self.options) {
            Ok(prepared) => {
                let before = self.groups.len();
                self.groups.retain(|group| {
                    group
                        .questions()
                        .iter()
                        .all(|q| prepared.questions.contains(q))
                });
                if self.groups.len() != before {
                    tracing::info!(
                        dropped = before - self.groups.len(),
                        "groups referring to missing questions removed"
                    );
                }
                Ok(&*self.upload.insert(prepared))
            }
            Err(error) => {
                self.reset();
                Err(error)
            }
        }
    }

    pub fn upload(&self) -> Option<&PreparedUpload> {
        self.upload.as_ref()
    }

    /// Questions of the current upload (empty without one).
    pub fn questions(&self) -> &[String] {
        self.upload
            .as_ref()
            .map(|upload| upload.questions.as_slice())
            .unwrap_or_default()
    }

    pub fn warnings(&self) -> &[String] {
        self.upload
            .as_ref()
            .map(|upload| upload.warnings.as_slice())
            .unwrap_or_default()
    }

    pub fn groups(&self) -> &[LearningTargetGroup] {
        &self.groups
    }

    /// Validates and stores a new group.
    ///
    /// # Errors
    ///
    /// Fails with [`AnalysisError::NoUpload`] without an upload, or with a
    /// [`GroupError`] if the definition is invalid, names an unknown question
    /// or reuses a group name. Rejected groups are never stored.
    pub fn add_group<I, S>(
        &mut self,
        name: &str,
        questions: I,
        min_correct: usize,
        max_correct: usize,
    ) -> Result<&LearningTargetGroup>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = LearningTargetGroup::new(name, questions, min_correct, max_correct)?;
        self.insert_group(group)
    }

    /// Stores an already constructed group after checking it against the upload.
    pub fn insert_group(&mut self, group: LearningTargetGroup) -> Result<&LearningTargetGroup> {
        let upload = self.upload.as_ref().ok_or(AnalysisError::NoUpload)?;
        if let Some(question) = group
            .questions()
            .iter()
            .find(|q| !upload.questions.contains(q))
        {
            return Err(GroupError::UnknownQuestion {
                question: question.clone(),
            }
            .into());
        }
        if self.groups.iter().any(|g| g.name() == group.name()) {
            return Err(GroupError::DuplicateName {
                name: group.name().to_string(),
            }
            .into());
        }
        self.groups.push(group);
        Ok(self.groups.last().expect("group was just pushed"))
    }

    /// Removes the group called `name`; returns whether one was removed.
    pub fn remove_group(&mut self, name: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|group| group.name() != name);
        self.groups.len() != before
    }

    pub fn clear_groups(&mut self) {
        self.groups.clear();
    }

    /// Mastery results for the stored groups, in definition order.
    pub fn analyze(&self) -> Result<Vec<AnalysisResult>> {
        let upload = self.upload.as_ref().ok_or(AnalysisError::NoUpload)?;
        aggregate(&upload.binary, &self.groups, &self.options.score_suffix)
    }

    /// Drops the upload and every group.
    pub fn reset(&mut self) {
        self.upload = None;
        self.groups.clear();
    }
}
