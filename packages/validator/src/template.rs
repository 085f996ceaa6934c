//! Expected-template parsing.
//!
//! An exercise template is markup text with optional `{{*}}` wildcards in its
//! text content. The grading target is always a container element, so the
//! template is wrapped in a synthetic root before parsing; authors never write
//! the wrapper themselves. Text and tail values are compiled into
//! [`TextPattern`]s once, here, rather than at every comparison.

use indexmap::IndexMap;

use crate::diagnostics::ParseError;
use crate::markup::{self, MarkupNode};
use crate::pattern::TextPattern;

/// Tag of the synthetic wrapper. The sandbox wraps produced markup in the
/// same plain container, so the roots line up.
pub const SYNTHETIC_ROOT_TAG: &str = "div";

/// One node of the compiled expected tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedNode {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<ExpectedNode>,
    pub text: Option<TextPattern>,
    pub tail: Option<TextPattern>,
}

/// A parsed, compiled expected template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    root: ExpectedNode,
}

impl Template {
    /// Parse an authored template string.
    ///
    /// A parse failure here means the exercise definition is broken; callers
    /// must surface it as a content defect, not as a grading outcome.
    pub fn parse(source: &str) -> Result<Template, ParseError> {
        let wrapped = format!("<{SYNTHETIC_ROOT_TAG}>{source}</{SYNTHETIC_ROOT_TAG}>");
        let tree = markup::parse(&wrapped)?;
        Ok(Template {
            root: compile(tree),
        })
    }

    pub fn root(&self) -> &ExpectedNode {
        &self.root
    }

    /// True when the template expects bare text only: no child elements and
    /// no attributes on the wrapper. Plain-string submissions can satisfy
    /// only such templates.
    pub fn expects_bare_text(&self) -> bool {
        self.root.children.is_empty() && self.root.attributes.is_empty()
    }
}

fn compile(node: MarkupNode) -> ExpectedNode {
    ExpectedNode {
        tag: node.tag,
        attributes: node.attributes,
        children: node.children.into_iter().map(compile).collect(),
        text: node.text.as_deref().map(TextPattern::parse),
        tail: node.tail.as_deref().map(TextPattern::parse),
    }
}
