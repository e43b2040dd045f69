//! Word-level codec for attribute words.
//!
//! Attribute words have the shape `=name=value`. The name never contains
//! `=`, but the value may, so a word is split at the second `=` only.

use crate::tokens::ATTRIBUTE_PREFIX;

/// Split an attribute word `=name=value` into `(name, value)`.
///
/// Returns `None` for words that are not attribute words or have an empty name.
pub fn parse_attribute_word(word: &str) -> Option<(&str, &str)> {
    let rest = word.strip_prefix(ATTRIBUTE_PREFIX)?;
    let (name, value) = rest.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}

/// Encode an attribute word.
pub fn encode_attribute_word(name: &str, value: &str) -> String {
    let mut word = String::with_capacity(name.len() + value.len() + 2);
    word.push(ATTRIBUTE_PREFIX);
    word.push_str(name);
    word.push('=');
    word.push_str(value);
    word
}
