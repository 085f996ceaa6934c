//! Tag classification tables.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Void elements never take children and have no closing tag. The sandbox
/// serializes them as `<br>` or `<br/>` with no `</br>`.
static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ]
    .into_iter()
    .collect()
});

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(tag.to_ascii_lowercase().as_str())
}

/// A tag name starts with an ASCII letter and continues with letters, digits,
/// hyphens or underscores (custom elements like `my-button` included).
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}
