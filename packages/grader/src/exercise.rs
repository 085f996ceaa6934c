//! Exercise catalog.
//!
//! Exercises are authored as JSON with camelCase keys. Each exercise carries
//! the expected-answer template and, optionally, a set of path-query rules
//! used as an alternate grading check. Hints unlock after a number of failed
//! tries.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use markup_validator::PathQuery;

/// A hint shown once the learner has failed often enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHint {
    /// Number of wrong tries after which the hint is displayed. Must be > 0.
    pub after_tries: u32,
    pub message: String,
}

/// A single markup exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub title: String,
    /// Detailed explanation of the topic the exercise covers.
    pub explanation: String,
    /// An example clarifying the explanation.
    pub example: String,
    /// Task description, including the expected output.
    pub description: String,
    /// Expected-answer template, `{{*}}` wildcards allowed in text.
    pub answer: String,
    #[serde(default)]
    pub error_hints: Vec<ErrorHint>,
    /// Optional path-query rules checked after the template match.
    #[serde(default)]
    pub path_checks: Vec<PathQuery>,
}

/// A titled group of exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    pub title: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
}

/// The full set of exercise groups for a tutorial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCatalog {
    pub exercise_groups: Vec<ExerciseGroup>,
}

impl ExerciseCatalog {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse exercise catalog")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read exercise file {}", path.display()))?;
        Self::from_json(&contents)
    }

    pub fn exercise(&self, id: crate::session::ExerciseId) -> Option<&Exercise> {
        self.exercise_groups
            .get(id.group)?
            .exercises
            .get(id.index)
    }
}
