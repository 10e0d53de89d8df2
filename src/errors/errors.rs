use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Replaces the position, keeping the error kind.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownTokenClass { .. } => "UnknownTokenClass",
            ErrorImpl::InvalidColor { .. } => "InvalidColor",
            ErrorImpl::MalformedThemeEntry { .. } => "MalformedThemeEntry",
            ErrorImpl::ReadError { .. } => "ReadError",
            ErrorImpl::SerializeError { .. } => "SerializeError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownTokenClass { label } => ErrorTip::Suggestion(format!(
                "Unknown token class `{}`, expected one of: comment, string, number, keyword, \
                 keyword-decl, constant, function, operator, punctuation, variable, whitespace, plain",
                label
            )),
            ErrorImpl::InvalidColor { value } => ErrorTip::Suggestion(format!(
                "Invalid color `{}`, colors are written as #RRGGBB or #RGB",
                value
            )),
            ErrorImpl::MalformedThemeEntry { entry } => ErrorTip::Suggestion(format!(
                "Could not read `{}`, theme entries look like `keyword = #C586C0`",
                entry
            )),
            ErrorImpl::ReadError { .. } => ErrorTip::None,
            ErrorImpl::SerializeError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown token class: {label:?}")]
    UnknownTokenClass { label: String },
    #[error("invalid color: {value:?}")]
    InvalidColor { value: String },
    #[error("malformed theme entry: {entry:?}")]
    MalformedThemeEntry { entry: String },
    #[error("could not read {path:?}: {message}")]
    ReadError { path: String, message: String },
    #[error("could not serialize tokens: {message}")]
    SerializeError { message: String },
}
