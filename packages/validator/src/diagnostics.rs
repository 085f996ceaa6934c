//! Grading diagnostics.
//!
//! Every top-level validation call produces exactly one [`MatchResult`]:
//! `Pass`, or the first mismatch encountered in document order. Mismatches are
//! never aggregated; the traversal short-circuits as soon as one is found.

use thiserror::Error;

/// Malformed markup on either side of a comparison.
///
/// Carries the raw message from the tree builder; no line/column recovery is
/// attempted. A parse failure on the template side means the exercise
/// definition itself is broken and should be reported to the content author,
/// never rendered as "your code is wrong".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed markup: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

/// Classification of a grading failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The actual markup could not be parsed (integration defect, not a
    /// normal grading outcome).
    ParseError,
    TagMismatch,
    MissingAttribute,
    UnexpectedAttribute,
    AttributeValueMismatch,
    MissingElement,
    UnexpectedElement,
    TextMismatch,
    /// Path-query mode: selected-set size differs from the expected count.
    CountMismatch,
    /// Path-query mode: no expected count was given and nothing matched.
    NoMatch,
    /// Path-query mode: the path expression uses unsupported syntax.
    UnsupportedQuery,
}

/// A single grading failure: what went wrong plus the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub kind: MismatchKind,
    pub message: String,
}

impl Mismatch {
    pub fn new(kind: MismatchKind, message: impl Into<String>) -> Self {
        Mismatch {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Pass,
    Fail(Mismatch),
}

impl MatchResult {
    pub fn fail(kind: MismatchKind, message: impl Into<String>) -> Self {
        MatchResult::Fail(Mismatch::new(kind, message))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, MatchResult::Pass)
    }

    /// The failure, if any.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            MatchResult::Pass => None,
            MatchResult::Fail(mismatch) => Some(mismatch),
        }
    }
}
