#![deny(clippy::all)]

//! Structural markup validator for coding-exercise grading.
//!
//! Compares a markup tree produced by executing learner code against an
//! expected template that may contain `{{*}}` text wildcards, and reports the
//! single most useful first-failure diagnostic. A path-query mode asserts
//! element occurrence counts independently of full-tree shape matching.

pub mod diagnostics;
pub mod markup;
pub mod matcher;
pub mod pattern;
pub mod query;
pub mod style;
pub mod template;

pub use diagnostics::{MatchResult, Mismatch, MismatchKind, ParseError};
pub use matcher::{check_submission, match_template, SubmissionOutput};
pub use pattern::{TextPattern, WILDCARD_TOKEN};
pub use query::{evaluate, evaluate_all, evaluate_serialized, PathQuery};
pub use template::{ExpectedNode, Template};
