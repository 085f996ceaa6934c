//! Markup tokenizer.
//!
//! Converts serialized markup into a flat token stream. Tags carry their
//! attributes already paired up; text tokens are entity-decoded. Comments are
//! skipped. Tokenization failures surface as [`ParseError`] with the raw
//! message; no source spans are tracked.

use crate::diagnostics::ParseError;
use crate::markup::tags::is_valid_tag_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    TagOpen {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    TagClose {
        name: String,
    },
    Text(String),
}

/// Tokenize a serialized markup string.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()?;
    Ok(lexer.tokens)
}

struct Lexer {
    chars: Vec<char>,
    index: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            index: 0,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn starts_with(&self, literal: &str) -> bool {
        let mut i = self.index;
        for ch in literal.chars() {
            if self.chars.get(i) != Some(&ch) {
                return false;
            }
            i += 1;
        }
        true
    }

    fn consume_literal(&mut self, literal: &str) -> bool {
        if self.starts_with(literal) {
            self.index += literal.chars().count();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_whitespace()) {
            self.index += 1;
        }
    }

    fn tokenize(&mut self) -> Result<(), ParseError> {
        while let Some(ch) = self.peek() {
            if ch == '<' {
                self.consume_markup()?;
            } else {
                self.consume_text();
            }
        }
        Ok(())
    }

    fn consume_text(&mut self) {
        let mut raw = String::new();
        while let Some(ch) = self.peek() {
            if ch == '<' {
                break;
            }
            raw.push(ch);
            self.index += 1;
        }
        if !raw.is_empty() {
            self.tokens.push(Token::Text(decode_entities(&raw)));
        }
    }

    fn consume_markup(&mut self) -> Result<(), ParseError> {
        if self.consume_literal("<!--") {
            return self.consume_comment();
        }
        if self.starts_with("<!") {
            return Err(ParseError::new("unsupported markup declaration"));
        }
        if self.consume_literal("</") {
            return self.consume_closing_tag();
        }
        self.index += 1; // '<'
        self.consume_open_tag()
    }

    fn consume_comment(&mut self) -> Result<(), ParseError> {
        while self.peek().is_some() {
            if self.consume_literal("-->") {
                return Ok(());
            }
            self.index += 1;
        }
        Err(ParseError::new("unterminated comment"))
    }

    fn consume_closing_tag(&mut self) -> Result<(), ParseError> {
        let name = self.consume_name()?;
        self.skip_whitespace();
        if self.advance() != Some('>') {
            return Err(ParseError::new(format!("malformed closing tag </{name}>")));
        }
        self.tokens.push(Token::TagClose { name });
        Ok(())
    }

    fn consume_open_tag(&mut self) -> Result<(), ParseError> {
        let name = self.consume_name()?;
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(ParseError::new(format!(
                        "unexpected end of markup inside tag <{name}>"
                    )));
                }
                Some('>') => {
                    self.index += 1;
                    self.tokens.push(Token::TagOpen {
                        name,
                        attributes,
                        self_closing: false,
                    });
                    return Ok(());
                }
                Some('/') => {
                    self.index += 1;
                    if self.advance() != Some('>') {
                        return Err(ParseError::new(format!(
                            "expected `>` after `/` in tag <{name}>"
                        )));
                    }
                    self.tokens.push(Token::TagOpen {
                        name,
                        attributes,
                        self_closing: true,
                    });
                    return Ok(());
                }
                Some(_) => attributes.push(self.consume_attribute(&name)?),
            }
        }
    }

    fn consume_name(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                name.push(ch);
                self.index += 1;
            } else {
                break;
            }
        }
        if !is_valid_tag_name(&name) {
            return Err(ParseError::new(format!("invalid tag name `{name}`")));
        }
        Ok(name)
    }

    fn consume_attribute(&mut self, tag: &str) -> Result<(String, String), ParseError> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '=' || ch == '>' || ch == '/' {
                break;
            }
            name.push(ch);
            self.index += 1;
        }
        if name.is_empty() {
            return Err(ParseError::new(format!(
                "malformed attribute in tag <{tag}>"
            )));
        }
        self.skip_whitespace();
        if self.peek() != Some('=') {
            // Boolean attribute, e.g. `<input disabled>`.
            return Ok((name, String::new()));
        }
        self.index += 1; // '='
        self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.index += 1;
                let mut raw = String::new();
                loop {
                    match self.advance() {
                        None => {
                            return Err(ParseError::new(format!(
                                "unterminated value for attribute {name} in tag <{tag}>"
                            )));
                        }
                        Some(ch) if ch == quote => break,
                        Some(ch) => raw.push(ch),
                    }
                }
                decode_entities(&raw)
            }
            _ => {
                let mut raw = String::new();
                while let Some(ch) = self.peek() {
                    if ch.is_whitespace() || ch == '>' {
                        break;
                    }
                    raw.push(ch);
                    self.index += 1;
                }
                if raw.is_empty() {
                    return Err(ParseError::new(format!(
                        "missing value for attribute {name} in tag <{tag}>"
                    )));
                }
                decode_entities(&raw)
            }
        };
        Ok((name, value))
    }
}

/// Decode the entity subset the sandbox serializer emits. Unknown entities are
/// left as-is rather than rejected.
pub fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let Some(semi) = rest.find(';') else {
            out.push_str(rest);
            return out;
        };
        let entity = &rest[1..semi];
        match decode_entity(entity) {
            Some(decoded) => out.push_str(&decoded),
            None => out.push_str(&rest[..=semi]),
        }
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "quot" => return Some("\"".to_string()),
        "apos" => return Some("'".to_string()),
        _ => {}
    }
    let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code).map(|ch| ch.to_string())
}
