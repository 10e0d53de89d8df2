//! Error types for the highlighter's fallible edges.
//!
//! Tokenizing never fails. Errors come from the layers around it:
//!
//! - Parsing token class labels and colors
//! - Reading theme override files
//! - Reading input files in the CLI

pub mod errors;

#[cfg(test)]
mod tests;
