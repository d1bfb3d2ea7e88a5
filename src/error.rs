//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure used for the fatal failures
//! a merge may raise. Warnings are not errors; they are collected separately
//! by the merge diagnostics.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure for fatal merge failures.
///
/// The error is split into a general message, the configuration path it was
/// raised at (such as `Query.hello.args.name`), and an optional context
/// string carrying further detail.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits.
/// It also implements [`error::Error`] so that it can be used with existing
/// patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) path: Option<String>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// Classification of fatal errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// Configuration whose shape is structurally invalid for its target and
    /// cannot be interpreted safely.
    ShapeMismatch,
    /// An inconsistency inside the type graph itself, such as a dangling
    /// type reference. Not reachable through configuration mistakes.
    Internal,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            path: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::ShapeMismatch),
        }
    }

    /// Create a new Error carrying the configuration path it was raised at.
    pub fn new_with_path<S: Into<String>, P: Into<String>>(
        message: S,
        path: P,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
            context: None,
            error_type: error_type.unwrap_or(ErrorType::ShapeMismatch),
        }
    }

    /// Returns the message of the current error. Path and context are
    /// discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the configuration path of the current error.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the classification of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information
    /// as well, which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let mut formatted = match self.error_type {
            ErrorType::ShapeMismatch => {
                format!("Configuration Error: {}", self.message)
            }
            ErrorType::Internal => {
                format!("Internal Error: {}", self.message)
            }
        };

        if let Some(ref path) = self.path {
            formatted.push_str(" (at ");
            formatted.push_str(path);
            formatted.push(')');
        }

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_path_and_classification() {
        let error = Error::new_with_path(
            "Expected an object configuration",
            "Query.hello",
            None,
        );
        assert_eq!(
            error.print(true),
            "Configuration Error: Expected an object configuration (at Query.hello)"
        );
        assert_eq!(error.error_type(), ErrorType::ShapeMismatch);

        let error = Error::new("Unknown type reference", Some(ErrorType::Internal));
        assert_eq!(error.print(false), "Internal Error: Unknown type reference");
        assert_eq!(error.path(), None);
    }
}
