//! Markup tree builder.
//!
//! Converts the token stream into a single-rooted [`MarkupNode`] tree. Text
//! before an element's first child lands in `text`; text after a child lands
//! in that child's `tail`. Malformed nesting surfaces as [`ParseError`].

use indexmap::IndexMap;

use crate::diagnostics::ParseError;
use crate::markup::ast::MarkupNode;
use crate::markup::lexer::{tokenize, Token};
use crate::markup::tags::is_void_element;

/// Parse a serialized markup string into a tree. Exactly one root element is
/// required; anything else is a parse failure.
pub fn parse(source: &str) -> Result<MarkupNode, ParseError> {
    let tokens = tokenize(source)?;
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.consume(token)?;
    }
    builder.finish()
}

struct TreeBuilder {
    stack: Vec<MarkupNode>,
    root: Option<MarkupNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            stack: Vec::new(),
            root: None,
        }
    }

    fn consume(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::TagOpen {
                name,
                attributes,
                self_closing,
            } => {
                let mut attrs = IndexMap::new();
                for (attr_name, attr_value) in attributes {
                    // Repeated attributes: last one wins.
                    attrs.insert(attr_name, attr_value);
                }
                let node = MarkupNode {
                    tag: name.clone(),
                    attributes: attrs,
                    children: Vec::new(),
                    text: None,
                    tail: None,
                };
                if self_closing || is_void_element(&name) {
                    self.attach(node)
                } else {
                    self.stack.push(node);
                    Ok(())
                }
            }
            Token::TagClose { name } => {
                let Some(open) = self.stack.pop() else {
                    return Err(ParseError::new(format!("unexpected closing tag </{name}>")));
                };
                if open.tag != name {
                    return Err(ParseError::new(format!(
                        "unexpected closing tag </{name}>, expected </{}>",
                        open.tag
                    )));
                }
                self.attach(open)
            }
            Token::Text(value) => self.consume_text(value),
        }
    }

    fn consume_text(&mut self, value: String) -> Result<(), ParseError> {
        match self.stack.last_mut() {
            Some(parent) => {
                match parent.children.last_mut() {
                    Some(previous) => append_text(&mut previous.tail, &value),
                    None => append_text(&mut parent.text, &value),
                }
                Ok(())
            }
            None => {
                // Serialization whitespace around the root carries no
                // structure; any other top-level text is malformed.
                if value.trim().is_empty() {
                    Ok(())
                } else {
                    Err(ParseError::new("text outside of root element"))
                }
            }
        }
    }

    fn attach(&mut self, node: MarkupNode) -> Result<(), ParseError> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(node);
                Ok(())
            }
            None if self.root.is_none() => {
                self.root = Some(node);
                Ok(())
            }
            None => Err(ParseError::new(format!(
                "multiple root elements (second root <{}>)",
                node.tag
            ))),
        }
    }

    fn finish(mut self) -> Result<MarkupNode, ParseError> {
        if let Some(open) = self.stack.pop() {
            return Err(ParseError::new(format!("unclosed <{}> element", open.tag)));
        }
        self.root
            .ok_or_else(|| ParseError::new("no root element found"))
    }
}

fn append_text(slot: &mut Option<String>, value: &str) {
    match slot {
        Some(existing) => existing.push_str(value),
        None => *slot = Some(value.to_string()),
    }
}
