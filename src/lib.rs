#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod render;
pub mod theme;

extern crate regex;

pub use lexer::lexer::{tokenize_document, tokenize_line};
pub use lexer::tokens::{Token, TokenClass};
pub use theme::theme::{Color, Theme, TOKEN_COLORS};

/// A 1-based line number in a named source. Line 0 means "no particular line".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "{}", self.1)
        } else {
            write!(f, "{}:{}", self.1, self.0)
        }
    }
}

/// Returns the text of 1-based line `line` in `content`, without its terminator.
pub fn get_line_at_position(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Formats an error the way the CLI reports it:
///
/// ```text
/// Error: UnknownTokenClass (Unknown token class `strings`, ...)
/// -> dark.theme:2
///   |
/// 2 | strings = #CE9178
/// ```
pub fn format_error(error: &Error, source: Option<&str>) -> String {
    let position = error.get_position();
    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!("-> {}\n", position));

    if let Some(line_text) = source.and_then(|content| get_line_at_position(content, position.0)) {
        let line_string = position.0.to_string();
        let padding = line_string.len() + 2;

        report.push_str(&format!("{:>padding$}\n", "|"));
        report.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    } else if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("   {}\n", error.get_kind()));
    }

    report
}
