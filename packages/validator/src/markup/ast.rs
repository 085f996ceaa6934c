//! Markup tree AST.
//!
//! Element tree node definitions. Trees are owned recursive values with no
//! back-references: a grading attempt builds them fresh from its inputs and
//! drops them when the result is returned.

use indexmap::IndexMap;

/// A single element in a markup tree.
///
/// `text` is the content immediately inside the node, before the first child.
/// `tail` is the content immediately after this node's closing tag and belongs
/// to the parent's text stream. This split mirrors how a serialized document
/// interleaves text with child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    /// Case-sensitive tag name, always non-empty.
    pub tag: String,
    /// Attribute map; keys are unique, insertion order carries no meaning
    /// (equality is order-independent).
    pub attributes: IndexMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<MarkupNode>,
    pub text: Option<String>,
    pub tail: Option<String>,
}

impl MarkupNode {
    pub fn new(tag: impl Into<String>) -> Self {
        MarkupNode {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
            tail: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Pre-order iterator over all strict descendants of this node.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order descendant traversal, document order.
pub struct Descendants<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
