//! Per-session grading state.
//!
//! Created once per browser session, mutated only by the grading-flow
//! controller, discarded on navigation. The validator itself never sees this
//! state; it stays a pure function of its inputs.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::exercise::{ErrorHint, Exercise};

/// Position of an exercise within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId {
    pub group: usize,
    pub index: usize,
}

impl ExerciseId {
    pub fn new(group: usize, index: usize) -> Self {
        ExerciseId { group, index }
    }
}

/// Wrong-attempt counters and the solved set.
#[derive(Debug, Default)]
pub struct GradingSession {
    wrong_attempts: HashMap<ExerciseId, u32>,
    solved: HashSet<ExerciseId>,
}

impl GradingSession {
    pub fn new() -> Self {
        GradingSession::default()
    }

    /// Record one grading attempt. Failed attempts bump the counter; a pass
    /// marks the exercise solved and leaves the counter alone.
    pub fn record_attempt(&mut self, id: ExerciseId, passed: bool) {
        if passed {
            self.solved.insert(id);
        } else {
            let attempts = self.wrong_attempts.entry(id).or_insert(0);
            *attempts += 1;
            debug!(?id, attempts = *attempts, "wrong attempt recorded");
        }
    }

    pub fn wrong_attempts(&self, id: ExerciseId) -> u32 {
        self.wrong_attempts.get(&id).copied().unwrap_or(0)
    }

    pub fn is_solved(&self, id: ExerciseId) -> bool {
        self.solved.contains(&id)
    }

    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    /// Hints whose try threshold has been reached for this exercise.
    pub fn unlocked_hints<'a>(&self, id: ExerciseId, exercise: &'a Exercise) -> Vec<&'a ErrorHint> {
        let attempts = self.wrong_attempts(id);
        exercise
            .error_hints
            .iter()
            .filter(|hint| hint.after_tries <= attempts)
            .collect()
    }
}
