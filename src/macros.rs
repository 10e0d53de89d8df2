//! Utility macros for the highlighter.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an anchored rule for the rule table
//!
//! These macros keep the rule table readable as one line per rule.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$text` - The consumed source text
/// * `$class` - The TokenClass
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("42", TokenClass::Number);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($text:expr, $class:expr) => {
        Token {
            text: String::from($text),
            class: $class,
        }
    };
}

/// Creates a rule for the lexer's rule table.
///
/// The pattern must start with `^`; rules are only ever tried against the
/// unconsumed remainder of the line. The optional third argument is a
/// character that must follow the match without being consumed.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"^[a-zA-Z_][a-zA-Z0-9_]*", TokenClass::Function, '(')
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $class:expr) => {
        Rule {
            regex: Regex::new($pattern).unwrap(),
            class: $class,
            followed_by: None,
        }
    };
    ($pattern:literal, $class:expr, $next:literal) => {
        Rule {
            regex: Regex::new($pattern).unwrap(),
            class: $class,
            followed_by: Some($next),
        }
    };
}
