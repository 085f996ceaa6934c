//! Wildcard text patterns.
//!
//! An expected-template text value either is a literal string or interleaves
//! literal segments with the `{{*}}` wildcard. Patterns are compiled once at
//! template-parse time and matched anchored (full-string); a wildcard matches
//! any characters, newlines included, but can never consume a child element —
//! that is guaranteed structurally, since a pattern only ever compares a
//! single text field.
//!
//! Literal segments compare by string equality, so template text containing
//! regex metacharacters needs no escaping.

/// The wildcard marker exercise authors embed in template text.
pub const WILDCARD_TOKEN: &str = "{{*}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Wildcard,
}

/// A compiled expected-text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPattern {
    segments: Vec<Segment>,
    source: String,
}

impl TextPattern {
    /// Compile template text, splitting on the wildcard token.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        for (i, literal) in source.split(WILDCARD_TOKEN).enumerate() {
            if i > 0 {
                segments.push(Segment::Wildcard);
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal.to_string()));
            }
        }
        TextPattern {
            segments,
            source: source.to_string(),
        }
    }

    /// The original template text, wildcard markers included. Used when
    /// rendering a text mismatch back to the learner.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Wildcard))
    }

    /// True when the pattern only ever matches the empty string.
    pub fn is_empty_literal(&self) -> bool {
        self.segments.is_empty()
    }

    /// Anchored match over the whole input.
    ///
    /// Literals before the first wildcard anchor at the start, the literal
    /// after the last wildcard anchors at the end, and interior literals are
    /// located greedily left-to-right. For `*`-only patterns the leftmost
    /// interior match always leaves the most input for later segments, so no
    /// backtracking is needed.
    pub fn matches(&self, input: &str) -> bool {
        let mut remaining = input;
        let mut pending_wildcard = false;
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard => pending_wildcard = true,
                Segment::Literal(literal) => {
                    if !pending_wildcard {
                        match remaining.strip_prefix(literal.as_str()) {
                            Some(rest) => remaining = rest,
                            None => return false,
                        }
                    } else if self.segments[i + 1..].is_empty() {
                        match remaining.strip_suffix(literal.as_str()) {
                            Some(_) => return true,
                            None => return false,
                        }
                    } else {
                        match remaining.find(literal.as_str()) {
                            Some(at) => remaining = &remaining[at + literal.len()..],
                            None => return false,
                        }
                        pending_wildcard = false;
                    }
                }
            }
        }
        pending_wildcard || remaining.is_empty()
    }
}
