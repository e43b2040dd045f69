//! Argument words that follow a command path.
//!
//! A command is sent as its path plus a list of words:
//! - Attribute words `=name=value` set a property
//! - Query words `?name=value` filter `print` output
//! - The `.id` pseudo-attribute addresses an existing item

use std::fmt;

/// Prefix of an attribute word.
pub const ATTRIBUTE_PREFIX: char = '=';

/// Prefix of a query word.
pub const QUERY_PREFIX: char = '?';

/// Pseudo-attribute naming an existing item.
pub const ID_ATTRIBUTE: &str = ".id";

/// Attribute of the `!done` sentence that carries a newly created item's id.
pub const RET_ATTRIBUTE: &str = "ret";

/// A single argument word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `=name=value`
    Attribute {
        /// Wire name.
        name: String,
        /// Raw wire value.
        value: String,
    },

    /// `?name=value`
    Query {
        /// Wire name.
        name: String,
        /// Raw wire value.
        value: String,
    },

    /// `=.id=<id>`
    Id(String),

    /// A word passed through untouched.
    Raw(String),
}

impl Token {
    /// Create an attribute word.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Token::Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a query word.
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Token::Query {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an identifier word.
    pub fn id(id: impl Into<String>) -> Self {
        Token::Id(id.into())
    }

    /// Create a word that is sent verbatim.
    pub fn raw(word: impl Into<String>) -> Self {
        Token::Raw(word.into())
    }

    /// Get the word as it is sent on the wire.
    pub fn to_word(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Attribute { name, value } => write!(f, "={}={}", name, value),
            Token::Query { name, value } => write!(f, "?{}={}", name, value),
            Token::Id(id) => write!(f, "={}={}", ID_ATTRIBUTE, id),
            Token::Raw(word) => write!(f, "{}", word),
        }
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

/// Collect tokens into the word list a transport expects.
pub fn to_words<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = Token>,
{
    tokens.into_iter().map(String::from).collect()
}
