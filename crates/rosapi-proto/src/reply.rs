//! Reply sentences.
//!
//! A reply to one command is an ordered list of `!re` sentences followed by a
//! `!done` sentence. Every sentence is a flat map of wire name to raw wire
//! value; nothing here interprets the values.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::parse_attribute_word;
use crate::tokens::RET_ATTRIBUTE;

/// One reply sentence's attributes: wire name → raw wire value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: HashMap<String, String>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        AttributeSet::default()
    }

    /// Build a set from `=name=value` words.
    ///
    /// Words that are not attribute words (queries, raw words) are skipped.
    /// A repeated name keeps the last value.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = AttributeSet::new();
        for word in words {
            let word = word.as_ref();
            match parse_attribute_word(word) {
                Some((name, value)) => set.insert(name, value),
                None => log::trace!("skipping non-attribute word {:?}", word),
            }
        }
        set
    }

    /// Look up a value, distinguishing "absent" from "empty".
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get a value, or the empty string when absent.
    pub fn get(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or("")
    }

    /// Check whether an attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove a value, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set has no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for AttributeSet {
    /// Space-separated `name=value` pairs, sorted by name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_unstable();
        for (i, (name, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

impl From<HashMap<String, String>> for AttributeSet {
    fn from(values: HashMap<String, String>) -> Self {
        AttributeSet { values }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        AttributeSet {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The complete reply to one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// The `!re` sentences, in arrival order.
    pub sentences: Vec<AttributeSet>,
    /// The terminal `!done` sentence.
    pub done: AttributeSet,
}

impl Reply {
    /// Create a reply from its `!re` sentences and an empty `!done`.
    pub fn new(sentences: Vec<AttributeSet>) -> Self {
        Reply {
            sentences,
            done: AttributeSet::new(),
        }
    }

    /// Create a reply carrying only a `!done` sentence.
    pub fn done(done: AttributeSet) -> Self {
        Reply {
            sentences: Vec::new(),
            done,
        }
    }

    /// Get the identifier acknowledged by a creation command, if any.
    pub fn ret(&self) -> Option<&str> {
        self.done.lookup(RET_ATTRIBUTE)
    }

    /// Whether the reply carried no `!re` sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
