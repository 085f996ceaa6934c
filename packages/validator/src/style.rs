//! Style-attribute sub-grammar.
//!
//! A `style` attribute is a `;`-delimited list of `property: value`
//! declarations. Declarations are compared as parsed pairs, independent of
//! ordering and serialization whitespace. The comparison is deliberately
//! asymmetric with the general attribute check: authors only assert the
//! properties they care about, so extra actual properties are ignored.

use indexmap::IndexMap;

use crate::diagnostics::{MatchResult, MismatchKind};

/// Parsed `style` attribute value. Duplicate properties fold last-wins,
/// mirroring cascade-style "last declaration wins" (not CSS specificity).
pub type StyleDeclarations = IndexMap<String, String>;

/// Parse a raw `style` attribute value.
///
/// Single pass over the input tracking parenthesis depth and quote state, so
/// `;` and `:` inside `url(...)`, `rgba(...)` or quoted `content` values do
/// not split declarations. Segments without a top-level `:` are dropped.
pub fn parse_style(value: &str) -> StyleDeclarations {
    let mut declarations = StyleDeclarations::new();

    let chars: Vec<char> = value.chars().collect();
    let mut paren_depth = 0i32;
    let mut quote: Option<char> = None;
    let mut prop_start = 0;
    let mut value_start: Option<usize> = None;
    let mut current_prop: Option<String> = None;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        i += 1;
        match ch {
            '(' if quote.is_none() => paren_depth += 1,
            ')' if quote.is_none() => paren_depth -= 1,
            '\'' | '"' => match quote {
                None => quote = Some(ch),
                Some(open) if open == ch => {
                    if i < 2 || chars[i - 2] != '\\' {
                        quote = None;
                    }
                }
                Some(_) => {}
            },
            ':' => {
                if current_prop.is_none() && paren_depth == 0 && quote.is_none() {
                    let prop: String = chars[prop_start..i - 1].iter().collect();
                    current_prop = Some(prop.trim().to_string());
                    value_start = Some(i);
                }
            }
            ';' => {
                if paren_depth == 0 && quote.is_none() {
                    if let (Some(prop), Some(start)) = (current_prop.take(), value_start.take()) {
                        let val: String = chars[start..i - 1].iter().collect();
                        declarations.insert(prop, val.trim().to_string());
                    }
                    prop_start = i;
                }
            }
            _ => {}
        }
    }

    if let (Some(prop), Some(start)) = (current_prop, value_start) {
        let val: String = chars[start..].iter().collect();
        declarations.insert(prop, val.trim().to_string());
    }

    declarations
}

/// Subset comparison of two raw `style` attribute values.
///
/// Every expected declaration must be present in the actual value with an
/// identical trimmed value; actual-only declarations pass unchecked.
pub fn compare_style(expected_raw: &str, actual_raw: &str) -> MatchResult {
    let expected = parse_style(expected_raw);
    let actual = parse_style(actual_raw);
    for (prop, expected_value) in &expected {
        match actual.get(prop) {
            None => {
                return MatchResult::fail(
                    MismatchKind::AttributeValueMismatch,
                    format!("Missing style property {prop}"),
                );
            }
            Some(actual_value) if actual_value != expected_value => {
                return MatchResult::fail(
                    MismatchKind::AttributeValueMismatch,
                    format!(
                        "Style property {prop} is set to {actual_value}, expected {expected_value}"
                    ),
                );
            }
            Some(_) => {}
        }
    }
    MatchResult::Pass
}
