use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    pub static ref LABEL_LOOKUP: HashMap<&'static str, TokenClass> = {
        let mut map = HashMap::new();
        for class in TokenClass::ALL {
            map.insert(class.as_str(), class);
        }
        map
    };
}

/// Syntactic role of a token. The set is closed and flat.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenClass {
    Comment,
    String,
    Number,
    Keyword,
    KeywordDecl,
    Constant,
    Function,
    Operator,
    Punctuation,
    Variable,
    Whitespace,
    Plain,
}

impl TokenClass {
    pub const ALL: [TokenClass; 12] = [
        TokenClass::Comment,
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Keyword,
        TokenClass::KeywordDecl,
        TokenClass::Constant,
        TokenClass::Function,
        TokenClass::Operator,
        TokenClass::Punctuation,
        TokenClass::Variable,
        TokenClass::Whitespace,
        TokenClass::Plain,
    ];

    /// The label used by renderers and theme files, e.g. `keyword-decl`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::Number => "number",
            TokenClass::Keyword => "keyword",
            TokenClass::KeywordDecl => "keyword-decl",
            TokenClass::Constant => "constant",
            TokenClass::Function => "function",
            TokenClass::Operator => "operator",
            TokenClass::Punctuation => "punctuation",
            TokenClass::Variable => "variable",
            TokenClass::Whitespace => "whitespace",
            TokenClass::Plain => "plain",
        }
    }

    /// Position of the class in [`TokenClass::ALL`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenClass {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        LABEL_LOOKUP.get(label).copied().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownTokenClass {
                    label: label.to_string(),
                },
                Position::null(),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(rename = "type")]
    pub class: TokenClass,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.class, self.text)
    }
}

impl Token {
    pub fn new(text: impl Into<String>, class: TokenClass) -> Self {
        Token {
            text: text.into(),
            class,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
