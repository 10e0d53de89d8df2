//! Renderers that turn token lines into colored output.
//!
//! Both renderers only read token classes and a `Theme`:
//!
//! - ANSI 24-bit escapes for terminals
//! - HTML spans for an editor overlay

pub mod render;
