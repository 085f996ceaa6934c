//! Path-query validator.
//!
//! A lighter grading mode than full-tree matching: a rule selects elements by
//! a small tag-path expression and asserts how many were found. `a/b` selects
//! direct children, `//b` selects descendants at any depth, and the axes mix
//! (`a//b`). Anything outside that grammar fails closed as an unsupported
//! query — a rule never silently passes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::diagnostics::{MatchResult, MismatchKind};
use crate::markup::{self, tags::is_valid_tag_name, MarkupNode};

/// One counting rule, typically authored alongside an exercise as
/// `{"path": "//p", "expected_count": 2, "error_message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub path: String,
    #[serde(default)]
    pub expected_count: Option<usize>,
    #[serde(rename = "error_message")]
    pub failure_message: String,
}

impl PathQuery {
    /// Presence rule: fails with `NoMatch` when nothing is selected.
    pub fn exists(path: impl Into<String>, failure_message: impl Into<String>) -> Self {
        PathQuery {
            path: path.into(),
            expected_count: None,
            failure_message: failure_message.into(),
        }
    }

    /// Counting rule: fails with `CountMismatch` unless exactly `count`
    /// elements are selected.
    pub fn counted(
        path: impl Into<String>,
        count: usize,
        failure_message: impl Into<String>,
    ) -> Self {
        PathQuery {
            path: path.into(),
            expected_count: Some(count),
            failure_message: failure_message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    tag: String,
}

/// Evaluate one rule against a parsed tree.
pub fn evaluate(query: &PathQuery, root: &MarkupNode) -> MatchResult {
    let Some(steps) = parse_path(&query.path) else {
        return MatchResult::fail(
            MismatchKind::UnsupportedQuery,
            format!("Unsupported path query '{}'", query.path),
        );
    };
    let selected = select(root, &steps);
    debug!(path = %query.path, count = selected.len(), "path query evaluated");
    match query.expected_count {
        Some(expected) if selected.len() != expected => {
            MatchResult::fail(MismatchKind::CountMismatch, query.failure_message.clone())
        }
        None if selected.is_empty() => {
            MatchResult::fail(MismatchKind::NoMatch, query.failure_message.clone())
        }
        _ => MatchResult::Pass,
    }
}

/// Evaluate a rule list; the first failing rule wins. An unsupported path is
/// fatal to its own rule only.
pub fn evaluate_all(queries: &[PathQuery], root: &MarkupNode) -> MatchResult {
    for query in queries {
        let result = evaluate(query, root);
        if !result.is_pass() {
            return result;
        }
    }
    MatchResult::Pass
}

/// Evaluate one rule against a serialized actual tree. A malformed tree is
/// recovered into a failing result, mirroring the matcher's policy.
pub fn evaluate_serialized(query: &PathQuery, serialized: &str) -> MatchResult {
    match markup::parse(serialized) {
        Ok(root) => evaluate(query, &root),
        Err(err) => {
            warn!(error = %err, "execution sandbox produced malformed markup");
            MatchResult::fail(
                MismatchKind::ParseError,
                format!("The produced output is not well-formed markup: {}", err.message),
            )
        }
    }
}

fn parse_path(path: &str) -> Option<Vec<Step>> {
    let (mut axis, rest) = if let Some(rest) = path.strip_prefix("//") {
        (Axis::Descendant, rest)
    } else if path.starts_with('/') {
        // Absolute single-slash paths are not part of the grammar.
        return None;
    } else {
        (Axis::Child, path)
    };
    if rest.is_empty() {
        return None;
    }
    let mut steps = Vec::new();
    for part in rest.split('/') {
        if part.is_empty() {
            if axis == Axis::Descendant {
                return None; // `///`
            }
            axis = Axis::Descendant;
            continue;
        }
        if !is_valid_tag_name(part) {
            return None;
        }
        steps.push(Step {
            axis,
            tag: part.to_string(),
        });
        axis = Axis::Child;
    }
    // A trailing `/` or `//` leaves a dangling axis.
    if axis == Axis::Descendant {
        return None;
    }
    Some(steps)
}

fn select<'a>(root: &'a MarkupNode, steps: &[Step]) -> Vec<&'a MarkupNode> {
    let mut current: Vec<&MarkupNode> = vec![root];
    for step in steps {
        let mut next: Vec<&MarkupNode> = Vec::new();
        for node in current {
            match step.axis {
                Axis::Child => {
                    next.extend(node.children.iter().filter(|child| child.tag == step.tag));
                }
                Axis::Descendant => {
                    next.extend(node.descendants().filter(|desc| desc.tag == step.tag));
                }
            }
        }
        // Nested matches are reachable through more than one selected
        // ancestor; count each element once.
        let mut seen = HashSet::new();
        next.retain(|node| seen.insert(*node as *const MarkupNode));
        current = next;
    }
    current
}
