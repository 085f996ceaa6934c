//! Markup tree model and parser.
//!
//! Handles the markup subset produced by the exercise sandbox's
//! element-construction primitives: nested elements with quoted attributes,
//! self-closing and void tags, free text with a small entity set.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod tags;

pub use ast::MarkupNode;
pub use lexer::{tokenize, Token};
pub use parser::parse;
pub use tags::is_void_element;
