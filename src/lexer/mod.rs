//! Lexical analysis for Go-Mix syntax highlighting.
//!
//! This module contains the line tokenizer that turns source text into
//! classified tokens for a renderer. It handles:
//!
//! - An ordered table of anchored regex rules, first match wins
//! - Keywords, constants, function calls and identifiers
//! - Comments, strings and numeric literals
//! - A one-character `plain` fallback so every input is fully covered

pub mod lexer;
pub mod tokens;
