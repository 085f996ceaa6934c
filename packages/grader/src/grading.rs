//! Grading-flow controller.
//!
//! Runs one submission through the template match and the exercise's path
//! checks, first failure winning across both, then folds the outcome into the
//! session. Template parse failures abort with `Err` — the exercise content is
//! broken and the attempt must not be counted against the learner.

use tracing::info;

use markup_validator::{
    check_submission, evaluate_all, MatchResult, MismatchKind, ParseError, SubmissionOutput,
};

use crate::exercise::Exercise;
use crate::session::{ExerciseId, GradingSession};

/// Outcome of one grading attempt, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub result: MatchResult,
    /// Wrong attempts so far, this one included if it failed.
    pub attempts: u32,
    pub solved: bool,
    /// Messages of hints unlocked by now, in authored order.
    pub unlocked_hints: Vec<String>,
}

/// Grade a submission and update the session.
pub fn grade(
    session: &mut GradingSession,
    id: ExerciseId,
    exercise: &Exercise,
    output: &SubmissionOutput,
) -> Result<GradeReport, ParseError> {
    // Path checks can serve as the sole grading strategy: an exercise with no
    // answer template is graded by its rules alone.
    let mut result = if exercise.answer.trim().is_empty() {
        MatchResult::Pass
    } else {
        check_submission(&exercise.answer, output)?
    };

    // Path checks complement the template match; they only run once the
    // shape already matches, keeping the first-failure policy across both.
    if result.is_pass() && !exercise.path_checks.is_empty() {
        result = match output.to_tree() {
            Ok(root) => evaluate_all(&exercise.path_checks, &root),
            Err(err) => MatchResult::fail(
                MismatchKind::ParseError,
                format!("The produced output is not well-formed markup: {}", err.message),
            ),
        };
    }

    let passed = result.is_pass();
    session.record_attempt(id, passed);
    info!(?id, passed, "submission graded");

    Ok(GradeReport {
        attempts: session.wrong_attempts(id),
        solved: session.is_solved(id),
        unlocked_hints: session
            .unlocked_hints(id, exercise)
            .into_iter()
            .map(|hint| hint.message.clone())
            .collect(),
        result,
    })
}
