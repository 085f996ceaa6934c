//! Structural matcher.
//!
//! Depth-first, pre-order comparison of an expected template tree against an
//! actual markup tree. The first mismatch in document order wins; nothing is
//! aggregated. Children are compared pairwise in document order only — an
//! exercise asks for elements in a specific order, and permutation matching
//! would be both exponential and pedagogically confusing.

use tracing::warn;

use crate::diagnostics::{MatchResult, MismatchKind, ParseError};
use crate::markup::{self, MarkupNode};
use crate::pattern::TextPattern;
use crate::style::compare_style;
use crate::template::{ExpectedNode, Template, SYNTHETIC_ROOT_TAG};

/// What the code-execution sandbox handed back: a serialized element tree, or
/// a plain string value that never was an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutput {
    Markup(String),
    Text(String),
}

impl SubmissionOutput {
    /// Parse the output into a tree. A plain string becomes a bare-text
    /// wrapper node, so it can only ever satisfy bare-text expectations.
    pub fn to_tree(&self) -> Result<MarkupNode, ParseError> {
        match self {
            SubmissionOutput::Markup(serialized) => markup::parse(serialized),
            SubmissionOutput::Text(text) => Ok(bare_text_tree(text)),
        }
    }
}

/// Grade a submission against an authored template.
///
/// A malformed template aborts the call with `Err` — the exercise itself is
/// broken. A malformed actual tree is recovered into a failing result and
/// logged as an integration defect; the learner should not be told their code
/// is wrong when the sandbox produced garbage.
pub fn check_submission(
    template_source: &str,
    output: &SubmissionOutput,
) -> Result<MatchResult, ParseError> {
    let template = Template::parse(template_source)?;
    let actual = match output.to_tree() {
        Ok(tree) => tree,
        Err(err) => {
            warn!(error = %err, "execution sandbox produced malformed markup");
            return Ok(MatchResult::fail(
                MismatchKind::ParseError,
                format!("The produced output is not well-formed markup: {}", err.message),
            ));
        }
    };
    Ok(match_template(&template, &actual))
}

/// Match a compiled template against an actual tree.
pub fn match_template(template: &Template, actual: &MarkupNode) -> MatchResult {
    match_node(template.root(), actual)
}

fn bare_text_tree(text: &str) -> MarkupNode {
    let mut node = MarkupNode::new(SYNTHETIC_ROOT_TAG);
    if !text.is_empty() {
        node.text = Some(text.to_string());
    }
    node
}

fn match_node(expected: &ExpectedNode, actual: &MarkupNode) -> MatchResult {
    if expected.tag != actual.tag {
        return MatchResult::fail(
            MismatchKind::TagMismatch,
            format!("Expected a <{}> tag, but got <{}>", expected.tag, actual.tag),
        );
    }
    let result = match_attributes(expected, actual);
    if !result.is_pass() {
        return result;
    }
    let result = match_text(expected.text.as_ref(), actual.text.as_deref());
    if !result.is_pass() {
        return result;
    }
    match_children(expected, actual)
}

fn match_attributes(expected: &ExpectedNode, actual: &MarkupNode) -> MatchResult {
    for (name, actual_value) in &actual.attributes {
        let Some(expected_value) = expected.attributes.get(name) else {
            return MatchResult::fail(
                MismatchKind::UnexpectedAttribute,
                format!("Unexpected attribute {name}"),
            );
        };
        if name == "style" {
            let result = compare_style(expected_value, actual_value);
            if !result.is_pass() {
                return result;
            }
        } else if actual_value != expected_value {
            return MatchResult::fail(
                MismatchKind::AttributeValueMismatch,
                format!("Attribute {name} is set to {actual_value}, expected {expected_value}"),
            );
        }
    }
    for name in expected.attributes.keys() {
        if !actual.attributes.contains_key(name) {
            return MatchResult::fail(
                MismatchKind::MissingAttribute,
                format!("Missing attribute {name}"),
            );
        }
    }
    MatchResult::Pass
}

/// Wildcard-aware full match of one text slot. Absence and the empty string
/// are equivalent on both sides.
fn match_text(expected: Option<&TextPattern>, actual: Option<&str>) -> MatchResult {
    let expected = expected.filter(|pattern| !pattern.is_empty_literal());
    let actual = actual.filter(|text| !text.is_empty());
    match (expected, actual) {
        (None, None) => MatchResult::Pass,
        (None, Some(actual)) => MatchResult::fail(
            MismatchKind::TextMismatch,
            format!("Unexpected text '{actual}'"),
        ),
        (Some(pattern), None) => MatchResult::fail(
            MismatchKind::TextMismatch,
            format!("Missing text '{}'", pattern.source()),
        ),
        (Some(pattern), Some(actual)) => {
            if pattern.matches(actual) {
                MatchResult::Pass
            } else {
                MatchResult::fail(
                    MismatchKind::TextMismatch,
                    format!(
                        "Text '{actual}' did not match the expected pattern '{}'",
                        pattern.source()
                    ),
                )
            }
        }
    }
}

fn match_children(expected: &ExpectedNode, actual: &MarkupNode) -> MatchResult {
    for (expected_child, actual_child) in expected.children.iter().zip(&actual.children) {
        let result = match_node(expected_child, actual_child);
        if !result.is_pass() {
            return result;
        }
        let result = match_text(expected_child.tail.as_ref(), actual_child.tail.as_deref());
        if !result.is_pass() {
            return result;
        }
    }
    if actual.children.len() > expected.children.len() {
        let extra = &actual.children[expected.children.len()];
        return MatchResult::fail(
            MismatchKind::UnexpectedElement,
            format!("Unexpected <{}> element", extra.tag),
        );
    }
    if expected.children.len() > actual.children.len() {
        let missing = &expected.children[actual.children.len()];
        return MatchResult::fail(
            MismatchKind::MissingElement,
            format!("Missing <{}> element", missing.tag),
        );
    }
    MatchResult::Pass
}
