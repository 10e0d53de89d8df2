//! Token class to color mapping.
//!
//! Holds the constant default palette and the `Theme` value renderers use.
//! The lexer never looks at colors.

pub mod theme;

#[cfg(test)]
mod tests;
