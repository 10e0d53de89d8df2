//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::sync::Arc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownTokenClass {
            label: "keyword_decl".to_string(),
        },
        Position(3, Arc::new("dark.theme".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnknownTokenClass");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Arc::new("dark.theme".to_string()));
    let error = Error::new(
        ErrorImpl::InvalidColor {
            value: "#12".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_error_at_replaces_position() {
    let error = Error::new(
        ErrorImpl::InvalidColor {
            value: "red".to_string(),
        },
        Position::null(),
    )
    .at(Position(7, Arc::new("light.theme".to_string())));

    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.get_position().1.as_str(), "light.theme");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidColor {
            value: "red".to_string()
        }
    );
}

#[test]
fn test_malformed_entry_tip() {
    let error = Error::new(
        ErrorImpl::MalformedThemeEntry {
            entry: "keyword #fff".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "MalformedThemeEntry");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("keyword #fff")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_read_error_has_no_tip() {
    let error = Error::new(
        ErrorImpl::ReadError {
            path: "missing.gm".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position(0, Arc::new("missing.gm".to_string())),
    );

    assert_eq!(error.get_error_name(), "ReadError");
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnknownTokenClass {
            label: "strings".to_string(),
        },
        Position(2, Arc::new("dark.theme".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "unknown token class: \"strings\" (dark.theme:2)"
    );
}

#[test]
fn test_null_position_display() {
    assert_eq!(Position::null().to_string(), "<null>");
}
