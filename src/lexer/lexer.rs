use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_RULE, MK_TOKEN};

use super::tokens::{Token, TokenClass};

pub struct Rule {
    regex: Regex,
    class: TokenClass,
    followed_by: Option<char>,
}

impl Rule {
    /// Length in bytes of the match at the start of `remainder`, if any.
    pub fn match_len(&self, remainder: &str) -> Option<usize> {
        let found = self.regex.find(remainder)?;

        if found.start() != 0 || found.is_empty() {
            return None;
        }

        if let Some(next) = self.followed_by {
            if !remainder[found.end()..].starts_with(next) {
                return None;
            }
        }

        Some(found.end())
    }

    pub fn class(&self) -> TokenClass {
        self.class
    }
}

// Order is precedence: the first rule matching at the cursor wins, even when a
// later rule would match a longer span. `(?-u:\b)` is an ASCII word boundary.
// Whitespace is the ECMAScript set: it includes U+FEFF but not U+0085.
lazy_static! {
    pub static ref RULES: Vec<Rule> = vec![
        MK_RULE!(r"^//.*", TokenClass::Comment),
        MK_RULE!(r"^/\*(?s:.)*?\*/", TokenClass::Comment),
        MK_RULE!(r#"^"(?:[^"\\]|\\.)*""#, TokenClass::String),
        MK_RULE!(r"^'(?:[^'\\]|\\.)*'", TokenClass::String),
        MK_RULE!(r"^`(?:[^`\\]|\\.)*`", TokenClass::String),
        MK_RULE!(r"^0[xX][0-9a-fA-F]+(?-u:\b)", TokenClass::Number),
        MK_RULE!(r"^[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?(?-u:\b)", TokenClass::Number),
        MK_RULE!(r"^[0-9]+(?-u:\b)", TokenClass::Number),
        MK_RULE!(r"^(?:if|else|while|for|foreach|in|break|continue|return)(?-u:\b)", TokenClass::Keyword),
        MK_RULE!(r"^(?:func|var|let|const|new|struct|array|map|set)(?-u:\b)", TokenClass::KeywordDecl),
        MK_RULE!(r"^(?:true|false|null|nil)(?-u:\b)", TokenClass::Constant),
        MK_RULE!(r"^[a-zA-Z_][a-zA-Z0-9_]*", TokenClass::Function, '('),
        MK_RULE!(r"^(?:&&|\|\||==|!=|<=|>=|<<=|>>=|\+=|-=|\*=|/=|%=|&=|\|=|\^=|<<|>>)", TokenClass::Operator),
        MK_RULE!(r"^[+\-*/%=<>!&|^~]", TokenClass::Operator),
        MK_RULE!(r"^[{}()\[\];,.]", TokenClass::Punctuation),
        MK_RULE!(r"^[a-zA-Z_][a-zA-Z0-9_]*(?-u:\b)", TokenClass::Variable),
        MK_RULE!(r"^[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+", TokenClass::Whitespace),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Consumes `len` bytes from the cursor as a token of `class`.
    pub fn emit(&mut self, class: TokenClass, len: usize) {
        let text = &self.remainder()[..len];
        self.push(MK_TOKEN!(text, class));
        self.advance_n(len);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Splits one line of Go-Mix source into classified tokens.
///
/// Never fails: a character no rule accepts becomes a one-character `plain`
/// token, so the cursor always advances. Concatenating the `text` of the
/// returned tokens gives back `line` exactly.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let mut lex = Lexer::new(line);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = RULES
            .iter()
            .find_map(|rule| rule.match_len(remainder).map(|len| (rule.class(), len)));

        match matched {
            Some((class, len)) => lex.emit(class, len),
            None => {
                let width = lex.at().map_or(1, char::len_utf8);
                lex.emit(TokenClass::Plain, width);
            }
        }
    }

    lex.into_tokens()
}

/// Tokenizes every line of `source` independently.
///
/// Lines are split on `\n`; a trailing `\r` is treated as part of the line
/// terminator. Nothing is carried from one line to the next, so a block
/// comment is only recognised when it opens and closes on one line.
pub fn tokenize_document(source: &str) -> Vec<Vec<Token>> {
    let lines = source
        .split('\n')
        .map(|line| tokenize_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect::<Vec<_>>();

    trace!(lines = lines.len(), "tokenized document");
    lines
}
